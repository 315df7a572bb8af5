// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava Leaderboard API Server
//!
//! Connects athletes via Strava OAuth and serves distance leaderboards
//! aggregated from their activities.

use std::sync::Arc;

use strava_leaderboard::{
    config::Config,
    services::{LeaderboardService, StravaClient},
    store::{ConnectionStore, MemoryStore},
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Strava Leaderboard API");

    // In-memory connection store; contents do not survive restarts
    let store: Arc<dyn ConnectionStore> = Arc::new(MemoryStore::new());
    tracing::info!("Connection store initialized");

    let strava = StravaClient::new(
        config.strava_client_id.clone(),
        config.strava_client_secret.clone(),
    );
    let leaderboard = LeaderboardService::new(strava.clone(), store.clone());

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        store,
        strava,
        leaderboard,
    });

    // Build router
    let app = strava_leaderboard::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("strava_leaderboard=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
