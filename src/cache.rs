//! TTL cache in front of remote metadata lookups
//!
//! Wraps an async provider with a time-to-live policy backed by the
//! persistent store. An expired record is treated as absent, never served;
//! a failed lookup is never cached.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::store::SharedStore;

/// Stored cache record: millisecond epoch timestamp plus the opaque payload
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheRecord {
    ts: u64,
    data: Value,
}

/// TTL cache over the persistent store
///
/// Concurrent in-flight fetches for the same key are not deduplicated: both
/// invoke the provider and both write, last write wins. Known limitation.
pub struct ResponseCache {
    store: SharedStore,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(store: SharedStore, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Canonical cache key for a request: path plus query parameters sorted
    /// by name, so equivalent requests collide regardless of insertion order.
    pub fn cache_key(path: &str, params: &[(&str, String)]) -> String {
        let mut sorted: Vec<&(&str, String)> = params.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));
        let query: Vec<String> = sorted
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect();
        format!("tmdb_{}?{}", path, query.join("&"))
    }

    /// Serve the unexpired record for `key`, or invoke the provider and
    /// store its payload. Provider errors propagate; nothing is written.
    pub async fn fetch<F, Fut, E>(&self, key: &str, provider: F) -> Result<Value, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, E>>,
    {
        if let Some(data) = self.lookup(key) {
            return Ok(data);
        }

        let data = provider().await?;
        let record = CacheRecord {
            ts: now_ms(),
            data: data.clone(),
        };
        if let Ok(value) = serde_json::to_value(&record) {
            self.store.set(key, value);
        }
        Ok(data)
    }

    /// Return the payload for `key` if a record exists and is within TTL
    fn lookup(&self, key: &str) -> Option<Value> {
        let record: CacheRecord = serde_json::from_value(self.store.get(key)?).ok()?;
        let age_ms = now_ms().saturating_sub(record.ts);
        if age_ms <= self.ttl.as_millis() as u64 {
            Some(record.data)
        } else {
            None
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// =============================================================================
// Unit Tests
// =============================================================================
