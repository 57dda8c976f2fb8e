//! Full-snapshot persistence of the workout log.
//!
//! Every mutation re-encodes the entire collection and overwrites the single
//! well-known key; there is no incremental update. The in-memory store stays
//! authoritative whether or not a write lands.

use thiserror::Error;

use super::kv::{KeyValueStore, KvError};
use crate::workouts::types::Workout;

/// Single key the whole collection is stored under.
pub const STORAGE_KEY: &str = "workouts";

/// Persistence failures. Writes degrade durability only; decode failures are
/// handled inside [`PersistenceAdapter::load`] and never surface.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to encode workouts: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Write(#[from] KvError),
}

/// Mirrors the store's snapshot into an opaque key-value store.
///
/// Owns no workout state of its own.
#[derive(Debug)]
pub struct PersistenceAdapter<K: KeyValueStore> {
    kv: K,
}

impl<K: KeyValueStore> PersistenceAdapter<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    /// Serialize the full snapshot and overwrite the storage key.
    pub fn persist(&mut self, workouts: &[Workout]) -> Result<(), PersistenceError> {
        let encoded = serde_json::to_string(workouts)?;
        self.kv.set(STORAGE_KEY, &encoded)?;
        tracing::debug!(count = workouts.len(), "Persisted workout snapshot");
        Ok(())
    }

    /// Load the persisted collection. An absent key or a decode failure is
    /// "no prior data", never an error.
    pub fn load(&self) -> Vec<Workout> {
        let Some(encoded) = self.kv.get(STORAGE_KEY) else {
            return Vec::new();
        };

        match serde_json::from_str(&encoded) {
            Ok(workouts) => workouts,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding undecodable workout snapshot");
                Vec::new()
            }
        }
    }

    /// Clear the underlying store entirely. Idempotent.
    pub fn reset(&mut self) -> Result<(), PersistenceError> {
        self.kv.clear()?;
        Ok(())
    }

    /// Access the underlying store.
    pub fn kv(&self) -> &K {
        &self.kv
    }
}
