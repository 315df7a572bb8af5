// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time conversion.

use chrono::NaiveDate;

/// Convert a calendar date to epoch seconds at UTC midnight.
///
/// Strava's activity listing takes `after`/`before` as epoch seconds, so a
/// `[start, end)` date window maps to the midnights bounding it.
pub fn date_to_epoch_utc(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp()
}
