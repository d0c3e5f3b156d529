//! DarkFlix - dark-themed terminal client for a curated movie and series
//! catalog
//!
//! Browse a curated TMDB-backed catalog, open title pages, pick episodes,
//! track favorites and resume points. Simple. Fast. Dark.
//!
//! # Modules
//!
//! - `models` - Data structures for catalog entries, metadata, playback
//! - `store` - Persistent key/value store
//! - `cache` - TTL cache over the store
//! - `api` - TMDB API client
//! - `catalog` - Merged catalog assembly from the local datasets
//! - `resolver` - Movie-or-series resolution for bare ids
//! - `router` - Path-based navigation
//! - `selector` - Season/episode selection
//! - `tracking` - Favorites and playback progress
//! - `player` - Simulated playback surface
//! - `ui` - TUI components
//! - `app` - Application state and navigation

pub mod api;
pub mod app;
pub mod cache;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod player;
pub mod resolver;
pub mod router;
pub mod selector;
pub mod store;
pub mod tracking;
pub mod ui;

// Re-export commonly used types
pub use api::{TmdbClient, TmdbError};
pub use app::App;
pub use cache::ResponseCache;
pub use catalog::CatalogBuilder;
pub use config::Config;
pub use models::{CatalogEntry, EpisodeRef, ResolvedTitle, TitleKind, TitleMetadata};
pub use resolver::{ResolveError, TitleResolver};
pub use router::{Route, Router};
pub use selector::EpisodeSelector;
pub use store::{JsonFileStore, MemoryStore, SharedStore, Store};
pub use tracking::{FavoritesStore, PlaybackObserver, ProgressTracker};
