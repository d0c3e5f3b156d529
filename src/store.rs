//! Persistent key/value store
//!
//! The only state that survives reloads (favorites, progress, cached TMDB
//! responses) lives behind the `Store` trait. Components receive the store
//! explicitly, so tests substitute `MemoryStore` for the file-backed one.

use log::warn;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Synchronous key/value persistence
///
/// No expiry, no size limits, no transactions. Writes that fail are
/// swallowed after a log line: the caller loses the update, which is the
/// documented hazard of the underlying medium, not an error the app
/// recovers from.
pub trait Store: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: Value);
}

/// Shared handle passed to every component that needs durability
pub type SharedStore = Arc<dyn Store>;

// =============================================================================
// File-backed store
// =============================================================================

/// Store persisted as one JSON object in the platform data dir
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default store path (~/.local/share/darkflix/store.json)
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("darkflix").join("store.json"))
    }

    /// Open the store at the default path
    pub fn open_default() -> anyhow::Result<Self> {
        let path = Self::default_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data path"))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self::new(path))
    }

    fn read_all(&self) -> HashMap<String, Value> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    fn write_all(&self, map: &HashMap<String, Value>) {
        let serialized = match serde_json::to_string(map) {
            Ok(s) => s,
            Err(e) => {
                warn!("store serialization failed: {}", e);
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, serialized) {
            warn!("store write failed for {}: {}", self.path.display(), e);
        }
    }
}

impl Store for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: Value) {
        let mut map = self.read_all();
        map.insert(key.to_string(), value);
        self.write_all(&map);
    }
}

// =============================================================================
// In-memory store
// =============================================================================

/// In-memory store used in tests and as a fallback
#[derive(Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh store in the shared handle
    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.map.lock().ok().and_then(|m| m.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) {
        if let Ok(mut m) = self.map.lock() {
            m.insert(key.to_string(), value);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
