// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava OAuth authentication routes.

use axum::{
    extract::{Query, State},
    response::Response,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::ConnectedAthlete;
use crate::routes::redirect_found;
use crate::AppState;

/// Scopes needed to read activities. `activity:read_all` would also cover
/// private activities; the leaderboard only needs public ones.
const OAUTH_SCOPES: &str = "read,activity:read";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/strava/login", get(auth_login))
        .route("/auth/strava/callback", get(auth_callback))
}

/// Start OAuth flow - redirect to Strava authorization.
async fn auth_login(State(state): State<Arc<AppState>>) -> Result<Response> {
    let callback_url = format!("{}/auth/strava/callback", state.config.public_url);

    let auth_url = format!(
        "https://www.strava.com/oauth/authorize?\
         client_id={}&\
         response_type=code&\
         redirect_uri={}&\
         approval_prompt=auto&\
         scope={}",
        state.config.strava_client_id,
        urlencoding::encode(&callback_url),
        urlencoding::encode(OAUTH_SCOPES),
    );

    tracing::info!(
        client_id = %state.config.strava_client_id,
        "Starting OAuth flow, redirecting to Strava"
    );

    redirect_found(&auth_url)
}

#[derive(Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    code: Option<String>,
}

/// OAuth callback - exchange code for tokens, store the connection, and hand
/// the session payload to the frontend as a query parameter.
async fn auth_callback(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CallbackParams>,
) -> Result<Response> {
    let code = params
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing 'code' query parameter".to_string()))?;

    tracing::info!("Exchanging authorization code for tokens");

    let tokens = state.strava.exchange_code(&code).await?;
    let athlete_id = tokens.athlete_id();

    state.store.upsert(ConnectedAthlete {
        athlete_id: athlete_id.clone(),
        refresh_token: tokens.refresh_token.clone(),
        scope: tokens.scope.clone().unwrap_or_default(),
    });

    tracing::info!(athlete_id = %athlete_id, "OAuth successful, athlete connected");

    let payload = serde_json::json!({
        "athleteId": tokens.athlete.as_ref().map(|a| a.id),
        "accesstoken": tokens.access_token,
        "connected": true,
    });

    let redirect_url = format!(
        "{}/stravaLogin?payload={}",
        state.config.frontend_url,
        urlencoding::encode(&payload.to_string()),
    );

    redirect_found(&redirect_url)
}
