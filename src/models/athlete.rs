//! Connected athlete model.

use serde::{Deserialize, Serialize};

/// A connected athlete's OAuth connection record.
///
/// Created (or overwritten) on each successful OAuth callback. The store key
/// is the athlete ID compared case-insensitively; the last callback wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectedAthlete {
    /// Strava athlete ID
    pub athlete_id: String,
    /// Long-lived refresh token from the most recent OAuth exchange
    pub refresh_token: String,
    /// Granted OAuth scopes as reported by Strava
    pub scope: String,
}
