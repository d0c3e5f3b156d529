//! CLI Command Handlers
//!
//! Implements all CLI commands by calling the appropriate backend services.
//! Each handler takes CLI args and Output, returns ExitCode.

use log::warn;
use serde::Serialize;

use crate::api::TmdbClient;
use crate::cache::ResponseCache;
use crate::catalog::CatalogBuilder;
use crate::cli::{
    CatalogCmd, Cli, Command, ContinueCmd, ExitCode, FavoritesCmd, KindFilter, Output, ResolveCmd,
};
use crate::config::Config;
use crate::models::TitleKind;
use crate::resolver::{ResolveError, TitleResolver};
use crate::store::{JsonFileStore, MemoryStore, SharedStore};
use crate::tracking::{FavoritesStore, ProgressTracker};

/// Dispatch the parsed subcommand
pub async fn run(cli: Cli) -> ExitCode {
    let output = Output::new(&cli);
    let config = Config::load_from(cli.config.as_deref());

    match cli.command {
        Some(Command::Catalog(cmd)) => catalog_cmd(cmd, &config, &output),
        Some(Command::Resolve(cmd)) => resolve_cmd(cmd, &config, &output).await,
        Some(Command::Favorites(cmd)) => favorites_cmd(cmd, &output),
        Some(Command::Continue(cmd)) => continue_cmd(cmd, &config, &output),
        None => ExitCode::Success,
    }
}

/// Open the persistent store, falling back to memory when the data dir is
/// unavailable. CLI reads then see an empty store, which is still usable.
fn open_store() -> SharedStore {
    match JsonFileStore::open_default() {
        Ok(store) => std::sync::Arc::new(store),
        Err(e) => {
            warn!("falling back to in-memory store: {}", e);
            MemoryStore::shared()
        }
    }
}

// =============================================================================
// Catalog Command
// =============================================================================

pub fn catalog_cmd(cmd: CatalogCmd, config: &Config, output: &Output) -> ExitCode {
    let builder = CatalogBuilder::new(&config.movies_file, &config.episodes_file);

    match builder.build() {
        Ok(mut entries) => {
            if let Some(filter) = cmd.kind {
                entries.retain(|e| match filter {
                    KindFilter::Movie => e.kind == TitleKind::Movie,
                    KindFilter::Series => e.kind == TitleKind::Series,
                });
            }

            output.info(format!("{} catalog entries", entries.len()));
            if let Err(e) = output.print(&entries) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => output.error(format!("Catalog build failed: {}", e), ExitCode::Error),
    }
}

// =============================================================================
// Resolve Command
// =============================================================================

pub async fn resolve_cmd(cmd: ResolveCmd, config: &Config, output: &Output) -> ExitCode {
    let store = open_store();
    let cache = ResponseCache::new(store, config.cache_ttl());
    let client = TmdbClient::new(config.tmdb_api_key(), config.language.clone(), cache);
    let resolver = TitleResolver::new(&client);

    output.info(format!("Resolving id {}...", cmd.id));

    match resolver.resolve(cmd.id).await {
        Ok(resolved) => {
            if let Err(e) = output.print(&resolved) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e @ ResolveError::NotFound(_)) => output.error(e.to_string(), ExitCode::NotFound),
        Err(ResolveError::Transport(e)) => {
            output.error(format!("Resolve failed: {}", e), ExitCode::NetworkError)
        }
    }
}

// =============================================================================
// Favorites Command
// =============================================================================

#[derive(Debug, Serialize)]
struct ToggleResponse {
    id: u64,
    favorite: bool,
}

pub fn favorites_cmd(cmd: FavoritesCmd, output: &Output) -> ExitCode {
    let favorites = FavoritesStore::new(open_store());

    let result = match cmd.toggle {
        Some(id) => {
            let favorite = favorites.toggle(id);
            output.info(if favorite {
                format!("Added {} to favorites", id)
            } else {
                format!("Removed {} from favorites", id)
            });
            output.print(ToggleResponse { id, favorite })
        }
        None => output.print(favorites.all()),
    };

    match result {
        Ok(()) => ExitCode::Success,
        Err(e) => output.error(format!("Failed to serialize: {}", e), ExitCode::Error),
    }
}

// =============================================================================
// Continue Command
// =============================================================================

#[derive(Debug, Serialize)]
struct ResumeEntry {
    id: u64,
    position: f64,
}

pub fn continue_cmd(_cmd: ContinueCmd, config: &Config, output: &Output) -> ExitCode {
    let tracker = ProgressTracker::new(open_store(), config.progress_interval_secs);

    let entries: Vec<ResumeEntry> = tracker
        .continue_watching()
        .into_iter()
        .map(|(id, position)| ResumeEntry { id, position })
        .collect();

    output.info(format!("{} resumable titles", entries.len()));
    match output.print(entries) {
        Ok(()) => ExitCode::Success,
        Err(e) => output.error(format!("Failed to serialize: {}", e), ExitCode::Error),
    }
}
