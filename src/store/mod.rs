// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Connection storage layer.

pub mod memory;

pub use memory::MemoryStore;

use crate::models::ConnectedAthlete;

/// Key-value persistence for connected athletes.
///
/// Handlers depend on this trait rather than a concrete store, so a durable
/// backend can be injected without touching request logic. Athlete IDs are
/// compared case-insensitively; `upsert` for an existing ID replaces the
/// whole record (no merge of scope history).
pub trait ConnectionStore: Send + Sync {
    /// Insert or replace the record for `athlete.athlete_id`.
    fn upsert(&self, athlete: ConnectedAthlete);

    /// Look up a single athlete's record.
    fn get(&self, athlete_id: &str) -> Option<ConnectedAthlete>;

    /// Snapshot of all current records. Order is unspecified; readers racing
    /// with concurrent upserts may observe partial update sets.
    fn all(&self) -> Vec<ConnectedAthlete>;
}
