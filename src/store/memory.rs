// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory connection store backed by a concurrent map.

use dashmap::DashMap;

use crate::models::ConnectedAthlete;
use crate::store::ConnectionStore;

/// Process-lifetime store; contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    // Keyed by the lowercased athlete ID; the record keeps the ID as received.
    athletes: DashMap<String, ConnectedAthlete>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConnectionStore for MemoryStore {
    fn upsert(&self, athlete: ConnectedAthlete) {
        self.athletes
            .insert(athlete.athlete_id.to_lowercase(), athlete);
    }

    fn get(&self, athlete_id: &str) -> Option<ConnectedAthlete> {
        self.athletes
            .get(&athlete_id.to_lowercase())
            .map(|entry| entry.value().clone())
    }

    fn all(&self) -> Vec<ConnectedAthlete> {
        self.athletes
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }
}
