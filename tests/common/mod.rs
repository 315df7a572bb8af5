// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test harness: a scripted mock Strava upstream plus an app builder
//! pointing the real client at it.

use axum::{
    extract::{Form, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::atomic::AtomicUsize;
use std::sync::{Arc, Mutex};

use strava_leaderboard::config::Config;
use strava_leaderboard::models::ConnectedAthlete;
use strava_leaderboard::routes::create_router;
use strava_leaderboard::services::{LeaderboardService, StravaClient};
use strava_leaderboard::store::{ConnectionStore, MemoryStore};
use strava_leaderboard::AppState;

/// Scripted upstream behavior, shared with the mock router's handlers.
#[derive(Default)]
pub struct MockStravaState {
    /// refresh_token -> access token handed out on refresh
    pub refresh_grants: DashMap<String, String>,
    /// authorization code -> token exchange response body
    pub exchanges: DashMap<String, serde_json::Value>,
    /// access token -> activity pages (each a JSON array); requests beyond
    /// the scripted pages return an empty array
    pub activity_pages: DashMap<String, Vec<serde_json::Value>>,
    /// Query parameters of the most recent activities request
    pub last_activity_query: Mutex<Option<HashMap<String, String>>>,
    pub token_calls: AtomicUsize,
    pub activity_calls: AtomicUsize,
}

/// A mock Strava server bound to an ephemeral local port.
pub struct MockStrava {
    pub base_url: String,
    pub state: Arc<MockStravaState>,
}

impl MockStrava {
    pub async fn spawn() -> Self {
        let state = Arc::new(MockStravaState::default());

        let router = Router::new()
            .route("/oauth/token", post(token_endpoint))
            .route("/api/v3/athlete/activities", get(activities_endpoint))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("mock server addr");

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("mock server");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Allow `refresh_token` to be redeemed for `access_token`.
    #[allow(dead_code)]
    pub fn grant_refresh(&self, refresh_token: &str, access_token: &str) {
        self.state
            .refresh_grants
            .insert(refresh_token.to_string(), access_token.to_string());
    }

    /// Script a successful code exchange for the given athlete.
    #[allow(dead_code)]
    pub fn script_exchange(
        &self,
        code: &str,
        athlete_id: u64,
        access_token: &str,
        refresh_token: &str,
    ) {
        self.state.exchanges.insert(
            code.to_string(),
            serde_json::json!({
                "token_type": "Bearer",
                "access_token": access_token,
                "refresh_token": refresh_token,
                "expires_at": 4_102_444_800i64,
                "scope": "read,activity:read",
                "athlete": {
                    "id": athlete_id,
                    "username": format!("athlete{}", athlete_id),
                },
            }),
        );
    }

    /// Script the activity pages served for an access token.
    #[allow(dead_code)]
    pub fn set_activity_pages(&self, access_token: &str, pages: Vec<Vec<serde_json::Value>>) {
        self.state.activity_pages.insert(
            access_token.to_string(),
            pages.into_iter().map(serde_json::Value::Array).collect(),
        );
    }
}

async fn token_endpoint(
    State(state): State<Arc<MockStravaState>>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    state
        .token_calls
        .fetch_add(1, std::sync::atomic::Ordering::SeqCst);

    match form.get("grant_type").map(String::as_str) {
        Some("refresh_token") => {
            let refresh = form.get("refresh_token").cloned().unwrap_or_default();
            match state.refresh_grants.get(&refresh) {
                Some(access) => Json(serde_json::json!({
                    "token_type": "Bearer",
                    "access_token": access.value().clone(),
                    "refresh_token": format!("{}-rotated", refresh),
                    "expires_at": 4_102_444_800i64,
                }))
                .into_response(),
                None => (
                    StatusCode::UNAUTHORIZED,
                    Json(serde_json::json!({ "message": "invalid refresh token" })),
                )
                    .into_response(),
            }
        }
        Some("authorization_code") => {
            let code = form.get("code").cloned().unwrap_or_default();
            match state.exchanges.get(&code) {
                Some(body) => Json(body.value().clone()).into_response(),
                None => (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({ "message": "invalid code" })),
                )
                    .into_response(),
            }
        }
        _ => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "message": "unsupported grant_type" })),
        )
            .into_response(),
    }
}

async fn activities_endpoint(
    State(state): State<Arc<MockStravaState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state
        .activity_calls
        .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    *state.last_activity_query.lock().unwrap() = Some(params.clone());

    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .unwrap_or_default()
        .to_string();

    let Some(pages) = state.activity_pages.get(&token) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "message": "invalid access token" })),
        )
            .into_response();
    };

    let page: usize = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1);

    let body = pages
        .value()
        .get(page.saturating_sub(1))
        .cloned()
        .unwrap_or_else(|| serde_json::Value::Array(vec![]));
    Json(body).into_response()
}

/// Create a test app whose Strava client targets the mock server.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(mock: &MockStrava) -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let store: Arc<dyn ConnectionStore> = Arc::new(MemoryStore::new());

    let strava = StravaClient::new(
        config.strava_client_id.clone(),
        config.strava_client_secret.clone(),
    )
    .with_endpoints(
        format!("{}/api/v3", mock.base_url),
        format!("{}/oauth/token", mock.base_url),
    );
    let leaderboard = LeaderboardService::new(strava.clone(), store.clone());

    let state = Arc::new(AppState {
        config,
        store,
        strava,
        leaderboard,
    });

    (create_router(state.clone()), state)
}

/// Store a connected athlete directly, skipping the OAuth dance.
#[allow(dead_code)]
pub fn connect(state: &Arc<AppState>, athlete_id: &str, refresh_token: &str) {
    state.store.upsert(ConnectedAthlete {
        athlete_id: athlete_id.to_string(),
        refresh_token: refresh_token.to_string(),
        scope: "read,activity:read".to_string(),
    });
}

/// JSON activity in the listing-endpoint shape.
#[allow(dead_code)]
pub fn activity(id: u64, distance_meters: f64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": format!("Activity {}", id),
        "sport_type": "Ride",
        "start_date": "2025-07-22T06:15:00Z",
        "distance": distance_meters,
        "moving_time": 3600,
    })
}
