//! Favorites and playback-progress persistence
//!
//! Both collections live in the shared store under fixed keys. Favorites are
//! a toggled id list; progress is a map of title id to last sampled position.
//! Progress writes are gated on whole seconds divisible by the sampling
//! interval, so a 1-per-second position feed produces one write per interval.

use log::debug;
use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::store::SharedStore;

pub const FAVORITES_KEY: &str = "favorites";
pub const PROGRESS_KEY: &str = "progress";

// =============================================================================
// Favorites
// =============================================================================

/// Favorite title ids behind the shared store
pub struct FavoritesStore {
    store: SharedStore,
}

impl FavoritesStore {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// All favorite ids in insertion order
    pub fn all(&self) -> Vec<u64> {
        match self.store.get(FAVORITES_KEY) {
            Some(Value::Array(items)) => items.iter().filter_map(|v| v.as_u64()).collect(),
            _ => Vec::new(),
        }
    }

    pub fn is_favorite(&self, title_id: u64) -> bool {
        self.all().contains(&title_id)
    }

    /// Flip membership for `title_id`; returns the new state.
    /// Toggling twice restores the original list.
    pub fn toggle(&self, title_id: u64) -> bool {
        let mut ids = self.all();
        let now_favorite = match ids.iter().position(|&id| id == title_id) {
            Some(i) => {
                ids.remove(i);
                false
            }
            None => {
                ids.push(title_id);
                true
            }
        };
        self.store.set(FAVORITES_KEY, json!(ids));
        now_favorite
    }
}

// =============================================================================
// Progress
// =============================================================================

/// Receives playback position updates from the player
pub trait PlaybackObserver: Send + Sync {
    fn position_changed(&self, title_id: u64, seconds: f64);
}

/// Samples playback positions into the shared store
pub struct ProgressTracker {
    store: SharedStore,
    interval_secs: u64,
}

impl ProgressTracker {
    pub fn new(store: SharedStore, interval_secs: u64) -> Self {
        Self {
            store,
            // Interval 0 would divide by zero in the gate
            interval_secs: interval_secs.max(1),
        }
    }

    /// Last sampled position for a title
    pub fn progress(&self, title_id: u64) -> Option<f64> {
        self.read_map().get(&title_id).copied()
    }

    /// Titles with recorded progress strictly above zero, as (id, seconds).
    /// A title whose only sample landed on second 0 does not qualify.
    pub fn continue_watching(&self) -> Vec<(u64, f64)> {
        self.read_map()
            .into_iter()
            .filter(|&(_, seconds)| seconds > 0.0)
            .collect()
    }

    fn read_map(&self) -> BTreeMap<u64, f64> {
        let mut map = BTreeMap::new();
        if let Some(Value::Object(entries)) = self.store.get(PROGRESS_KEY) {
            for (key, value) in entries {
                if let (Ok(id), Some(seconds)) = (key.parse::<u64>(), value.as_f64()) {
                    map.insert(id, seconds);
                }
            }
        }
        map
    }

    fn write(&self, title_id: u64, seconds: f64) {
        let mut map = self.read_map();
        map.insert(title_id, seconds);
        let entries: serde_json::Map<String, Value> = map
            .into_iter()
            .map(|(id, s)| (id.to_string(), json!(s)))
            .collect();
        self.store.set(PROGRESS_KEY, Value::Object(entries));
        debug!("progress sampled: title {} at {:.0}s", title_id, seconds);
    }
}

impl PlaybackObserver for ProgressTracker {
    /// Persist only when the truncated position hits the interval grid.
    /// Second 0 passes the gate, so starting playback records position 0.
    fn position_changed(&self, title_id: u64, seconds: f64) {
        if (seconds.floor() as u64) % self.interval_secs == 0 {
            self.write(title_id, seconds);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, Store};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Store wrapper that counts writes
    struct CountingStore {
        inner: MemoryStore,
        writes: AtomicUsize,
    }

    impl CountingStore {
        fn new() -> Self {
            Self {
                inner: MemoryStore::new(),
                writes: AtomicUsize::new(0),
            }
        }
    }

    impl Store for CountingStore {
        fn get(&self, key: &str) -> Option<Value> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: Value) {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.set(key, value);
        }
    }

    #[test]
    fn test_favorites_toggle_involution() {
        let favorites = FavoritesStore::new(MemoryStore::shared());
        assert!(favorites.all().is_empty());

        assert!(favorites.toggle(42));
        assert!(favorites.is_favorite(42));

        assert!(!favorites.toggle(42));
        assert!(!favorites.is_favorite(42));
        assert!(favorites.all().is_empty());
    }

    #[test]
    fn test_favorites_insertion_order() {
        let favorites = FavoritesStore::new(MemoryStore::shared());
        favorites.toggle(3);
        favorites.toggle(1);
        favorites.toggle(2);
        assert_eq!(favorites.all(), vec![3, 1, 2]);

        favorites.toggle(1);
        assert_eq!(favorites.all(), vec![3, 2]);
    }

    #[test]
    fn test_favorites_ignore_malformed_stored_value() {
        let store = MemoryStore::shared();
        store.set(FAVORITES_KEY, json!("not an array"));
        let favorites = FavoritesStore::new(store);
        assert!(favorites.all().is_empty());
    }

    #[test]
    fn test_progress_gate_samples_on_interval() {
        let store = Arc::new(CountingStore::new());
        let tracker = ProgressTracker::new(store.clone(), 5);

        // One update per second, as the player emits them
        for second in 0..=12 {
            tracker.position_changed(7, second as f64);
        }

        // Seconds 0, 5 and 10 pass the gate
        assert_eq!(store.writes.load(Ordering::SeqCst), 3);
        assert_eq!(tracker.progress(7), Some(10.0));
    }

    #[test]
    fn test_progress_gate_truncates_fractions() {
        let store = Arc::new(CountingStore::new());
        let tracker = ProgressTracker::new(store.clone(), 5);

        tracker.position_changed(7, 5.9);
        assert_eq!(tracker.progress(7), Some(5.9));

        tracker.position_changed(7, 6.1);
        assert_eq!(tracker.progress(7), Some(5.9)); // 6 not on the grid
    }

    #[test]
    fn test_continue_watching_excludes_zero() {
        let tracker = ProgressTracker::new(MemoryStore::shared(), 5);
        tracker.position_changed(1, 0.0);
        tracker.position_changed(2, 25.0);
        tracker.position_changed(3, 125.0);

        let resumable = tracker.continue_watching();
        assert_eq!(resumable, vec![(2, 25.0), (3, 125.0)]);
    }

    #[test]
    fn test_progress_overwrites_per_title() {
        let tracker = ProgressTracker::new(MemoryStore::shared(), 5);
        tracker.position_changed(9, 5.0);
        tracker.position_changed(9, 10.0);
        assert_eq!(tracker.progress(9), Some(10.0));
        assert_eq!(tracker.continue_watching().len(), 1);
    }
}
