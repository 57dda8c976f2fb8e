//! Opaque string-keyed storage.
//!
//! The persistence layer only ever sees this trait; the physical mechanism
//! behind it (a JSON file on disk, a map in memory) is interchangeable.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from the underlying storage mechanism.
#[derive(Debug, Error)]
pub enum KvError {
    #[error("storage write failed: {0}")]
    Write(String),
}

/// String-keyed get/set/clear store.
pub trait KeyValueStore {
    /// Fetch the value under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError>;

    /// Drop every key.
    fn clear(&mut self) -> Result<(), KvError>;
}

/// Purely in-memory store, used in tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryKv {
    entries: HashMap<String, String>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), KvError> {
        self.entries.clear();
        Ok(())
    }
}

/// File-backed store: all keys live in one JSON document that is rewritten
/// on every mutation.
#[derive(Debug)]
pub struct FileKv {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileKv {
    /// Open the store at `path`. A missing or unreadable file starts empty;
    /// prior data is never a reason to fail startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Discarding unreadable storage file");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self { path, entries }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), KvError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| KvError::Write(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(&self.entries).map_err(|e| KvError::Write(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| KvError::Write(e.to_string()))
    }
}

impl KeyValueStore for FileKv {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn clear(&mut self) -> Result<(), KvError> {
        self.entries.clear();
        self.flush()
    }
}
