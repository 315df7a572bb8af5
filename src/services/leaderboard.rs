// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard aggregation over connected athletes.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::AppError;
use crate::models::LeaderboardRow;
use crate::services::StravaClient;
use crate::store::ConnectionStore;
use crate::time_utils::date_to_epoch_utc;

/// Computes ranked distance totals over a date window.
#[derive(Clone)]
pub struct LeaderboardService {
    client: StravaClient,
    store: Arc<dyn ConnectionStore>,
}

impl LeaderboardService {
    pub fn new(client: StravaClient, store: Arc<dyn ConnectionStore>) -> Self {
        Self { client, store }
    }

    /// Compute totals for the `[start, end)` window across all stored
    /// athletes.
    ///
    /// Athletes are processed sequentially: refresh the access token, fetch
    /// activities in the window, sum distance. Every stored athlete produces
    /// a row, including athletes with no activities (0.0 km). Any single
    /// refresh or fetch failure fails the whole computation.
    pub async fn compute(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<LeaderboardRow>, AppError> {
        let after = date_to_epoch_utc(start);
        let before = date_to_epoch_utc(end);

        let mut rows = Vec::new();
        for athlete in self.store.all() {
            let tokens = self
                .client
                .refresh_access_token(&athlete.refresh_token)
                .await?;

            let activities = self
                .client
                .list_activities(&tokens.access_token, after, before)
                .await?;

            let meters: f64 = activities.iter().map(|a| a.distance).sum();

            tracing::debug!(
                athlete_id = %athlete.athlete_id,
                activities = activities.len(),
                meters,
                "Aggregated athlete distance"
            );

            rows.push(LeaderboardRow {
                athlete_id: athlete.athlete_id,
                total_km: round_km(meters / 1000.0),
            });
        }

        sort_rows(&mut rows);
        Ok(rows)
    }
}

/// Sort descending by total; stable, so equal totals keep encounter order.
fn sort_rows(rows: &mut [LeaderboardRow]) {
    rows.sort_by(|a, b| b.total_km.total_cmp(&a.total_km));
}

/// Round to two decimals, half away from zero.
fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}
