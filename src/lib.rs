// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava Leaderboard: distance totals across connected athletes.
//!
//! This crate provides the backend API that connects athletes via Strava
//! OAuth and aggregates their activity distance over a date window into a
//! ranked leaderboard.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod time_utils;

use std::sync::Arc;

use config::Config;
use services::{LeaderboardService, StravaClient};
use store::ConnectionStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn ConnectionStore>,
    pub strava: StravaClient,
    pub leaderboard: LeaderboardService,
}
