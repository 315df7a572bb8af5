// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod leaderboard;
pub mod strava;

pub use leaderboard::LeaderboardService;
pub use strava::StravaClient;
