// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard query route.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::LeaderboardRow;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/leaderboard", get(get_leaderboard))
}

#[derive(Deserialize)]
struct LeaderboardQuery {
    /// Window start date (YYYY-MM-DD, inclusive)
    #[serde(default)]
    start: Option<String>,
    /// Window end date (YYYY-MM-DD, exclusive)
    #[serde(default)]
    end: Option<String>,
}

fn parse_date(name: &str, raw: Option<&str>) -> Result<NaiveDate> {
    let raw = raw
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("Missing '{}' query parameter", name)))?;

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest(format!(
            "Invalid '{}' parameter: must be a YYYY-MM-DD date",
            name
        ))
    })
}

/// Distance totals for all connected athletes over a date window, ranked
/// descending.
async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LeaderboardQuery>,
) -> Result<Json<Vec<LeaderboardRow>>> {
    let start = parse_date("start", params.start.as_deref())?;
    let end = parse_date("end", params.end.as_deref())?;

    tracing::debug!(%start, %end, "Computing leaderboard");

    let rows = state.leaderboard.compute(start, end).await?;
    Ok(Json(rows))
}
