// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod athlete;
pub mod leaderboard;

pub use athlete::ConnectedAthlete;
pub use leaderboard::LeaderboardRow;
