//! Leaderboard row model.

use serde::Serialize;

/// One ranked leaderboard entry, computed per request.
///
/// Serialized camelCase: the browser frontend consumes `athleteId`/`totalKm`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    /// Strava athlete ID
    pub athlete_id: String,
    /// Total distance over the window in kilometers, rounded to 2 decimals
    pub total_km: f64,
}
