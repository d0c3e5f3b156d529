//! Configuration management for DarkFlix
//!
//! Handles config file loading/saving and the TMDB API key.
//! Config is stored at ~/.config/darkflix/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// TMDB API base URL
pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Card-sized poster base URL (w500)
pub const TMDB_IMG_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// Full-resolution poster base URL
pub const TMDB_IMG_ORIGINAL: &str = "https://image.tmdb.org/t/p/original";

/// Placeholder shown when a title has no poster
pub const POSTER_PLACEHOLDER: &str = "https://via.placeholder.com/300x450?text=No+Poster";

/// Placeholder video used while episodes have no real source attached
pub const SAMPLE_VIDEO_URL: &str =
    "https://sample-videos.com/video123/mp4/720/big_buck_bunny_720p_1mb.mp4";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TMDB API key (env var TMDB_API_KEY overrides)
    pub tmdb_api_key: Option<String>,
    /// Metadata language sent on every TMDB call
    pub language: String,
    /// Cache time-to-live in seconds, applied uniformly to all keys
    pub cache_ttl_secs: u64,
    /// Playback-progress sampling interval in seconds
    pub progress_interval_secs: u64,
    /// Movie-id dataset path
    pub movies_file: PathBuf,
    /// Episode dataset path
    pub episodes_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tmdb_api_key: None,
            language: "it-IT".to_string(),
            cache_ttl_secs: 30 * 60,
            progress_interval_secs: 5,
            movies_file: PathBuf::from("assets/data/filmids.json"),
            episodes_file: PathBuf::from("assets/data/serietv.json"),
        }
    }
}

impl Config {
    /// Get config file path (~/.config/darkflix/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("darkflix").join("config.toml"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Load config from an explicit path, falling back to the default
    /// location when none is given
    pub fn load_from(path: Option<&Path>) -> Self {
        match path {
            Some(p) => std::fs::read_to_string(p)
                .ok()
                .and_then(|s| toml::from_str(&s).ok())
                .unwrap_or_default(),
            None => Self::load(),
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path().ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Get the TMDB API key: environment variable first, then config file
    ///
    /// An empty key still produces well-formed requests; TMDB answers them
    /// with 401 and the error surfaces through the normal transport path.
    pub fn tmdb_api_key(&self) -> String {
        if let Ok(key) = std::env::var("TMDB_API_KEY") {
            return key;
        }
        if let Some(ref key) = self.tmdb_api_key {
            return key.clone();
        }
        log::warn!("no TMDB API key configured (set TMDB_API_KEY or config tmdb_api_key)");
        String::new()
    }

    /// Cache TTL as a Duration
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert!(config.tmdb_api_key.is_none());
        assert_eq!(config.language, "it-IT");
        assert_eq!(config.cache_ttl_secs, 1800);
        assert_eq!(config.progress_interval_secs, 5);
    }

    #[test]
    fn test_cache_ttl_duration() {
        let config = Config {
            cache_ttl_secs: 60,
            ..Default::default()
        };
        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
    }

    #[test]
    fn test_partial_config_parses() {
        let config: Config = toml::from_str(r#"language = "en-US""#).unwrap();
        assert_eq!(config.language, "en-US");
        assert_eq!(config.cache_ttl_secs, 1800); // default kept
    }
}
