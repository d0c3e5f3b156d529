//! Data structures and types for DarkFlix
//!
//! Contains the shared models used across the application:
//! - **Catalog**: typed catalog entries merged from the local datasets
//! - **Metadata**: the slice of TMDB responses the app actually consumes
//! - **Playback**: the source reference handed to the playback collaborator

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{POSTER_PLACEHOLDER, TMDB_IMG_BASE, TMDB_IMG_ORIGINAL};

// =============================================================================
// Catalog Models
// =============================================================================

/// Content-kind discriminator for catalog entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleKind {
    Movie,
    Series,
}

impl fmt::Display for TitleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitleKind::Movie => write!(f, "Movie"),
            TitleKind::Series => write!(f, "Series"),
        }
    }
}

/// A (season, episode) pair as it appears in the episode dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EpisodeRef {
    pub season: u32,
    pub episode: u32,
}

impl fmt::Display for EpisodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{:02}E{:02}", self.season, self.episode)
    }
}

/// One browsable title in the merged catalog
///
/// Movies carry no episodes; series carry their raw (season, episode) pairs
/// in dataset order. Sorting is the episode selector's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub kind: TitleKind,
    pub tmdb_id: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub episodes: Vec<EpisodeRef>,
}

impl CatalogEntry {
    pub fn movie(tmdb_id: u64) -> Self {
        Self {
            kind: TitleKind::Movie,
            tmdb_id,
            episodes: Vec::new(),
        }
    }

    pub fn series(tmdb_id: u64, episodes: Vec<EpisodeRef>) -> Self {
        Self {
            kind: TitleKind::Series,
            tmdb_id,
            episodes,
        }
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TitleKind::Movie => write!(f, "movie #{}", self.tmdb_id),
            TitleKind::Series => {
                write!(f, "series #{} ({} episodes)", self.tmdb_id, self.episodes.len())
            }
        }
    }
}

// =============================================================================
// Metadata Models (TMDB)
// =============================================================================

/// The slice of a TMDB title response the app consumes
///
/// Movies use `title`, series use `name`; the alias folds both into one
/// field. Everything else in the payload is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleMetadata {
    pub id: u64,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl TitleMetadata {
    /// Card-sized poster URL, falling back to the placeholder image
    pub fn poster_url(&self) -> String {
        match &self.poster_path {
            Some(path) => format!("{}{}", TMDB_IMG_BASE, path),
            None => POSTER_PLACEHOLDER.to_string(),
        }
    }

    /// Full-resolution poster URL for the title page
    pub fn poster_url_original(&self) -> String {
        match &self.poster_path {
            Some(path) => format!("{}{}", TMDB_IMG_ORIGINAL, path),
            None => POSTER_PLACEHOLDER.to_string(),
        }
    }

    /// In-app path for this title, `/titles/<id>-<slug>`
    pub fn title_path(&self) -> String {
        format!("/titles/{}-{}", self.id, slug(&self.title))
    }
}

impl fmt::Display for TitleMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.title, self.id)
    }
}

/// The slice of a TMDB episode response the app consumes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeInfo {
    #[serde(default)]
    pub name: Option<String>,
}

/// A resolved title: the kind inferred by probing plus its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedTitle {
    pub kind: TitleKind,
    pub metadata: TitleMetadata,
}

// =============================================================================
// Playback Models
// =============================================================================

/// Source reference handed to the playback collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackSource {
    pub url: String,
    pub title: String,
}

// =============================================================================
// Utility Functions
// =============================================================================

/// Lowercased, dash-separated slug for title paths
pub fn slug(title: &str) -> String {
    let lower = title.to_lowercase();
    match regex::Regex::new(r"\s+") {
        Ok(re) => re.replace_all(&lower, "-").into_owned(),
        Err(_) => lower,
    }
}

/// Format elapsed seconds as M:SS for resume labels
pub fn format_resume(seconds: f64) -> String {
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_kind_display() {
        assert_eq!(TitleKind::Movie.to_string(), "Movie");
        assert_eq!(TitleKind::Series.to_string(), "Series");
    }

    #[test]
    fn test_title_kind_serde() {
        let json = serde_json::to_string(&TitleKind::Series).unwrap();
        assert_eq!(json, "\"series\"");

        let parsed: TitleKind = serde_json::from_str("\"movie\"").unwrap();
        assert_eq!(parsed, TitleKind::Movie);
    }

    #[test]
    fn test_metadata_accepts_title_or_name() {
        let movie: TitleMetadata =
            serde_json::from_str(r#"{"id": 1, "title": "The Batman"}"#).unwrap();
        assert_eq!(movie.title, "The Batman");

        let series: TitleMetadata =
            serde_json::from_str(r#"{"id": 2, "name": "Breaking Bad"}"#).unwrap();
        assert_eq!(series.title, "Breaking Bad");
    }

    #[test]
    fn test_poster_url_fallback() {
        let with_poster = TitleMetadata {
            id: 1,
            title: "X".into(),
            poster_path: Some("/abc.jpg".into()),
            overview: None,
        };
        assert!(with_poster.poster_url().ends_with("/abc.jpg"));

        let without = TitleMetadata {
            id: 1,
            title: "X".into(),
            poster_path: None,
            overview: None,
        };
        assert_eq!(without.poster_url(), POSTER_PLACEHOLDER);
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Some Show"), "some-show");
        assert_eq!(slug("The  Spaced   Out Title"), "the-spaced-out-title");
        assert_eq!(slug("single"), "single");
    }

    #[test]
    fn test_title_path() {
        let meta = TitleMetadata {
            id: 42,
            title: "Some Show".into(),
            poster_path: None,
            overview: None,
        };
        assert_eq!(meta.title_path(), "/titles/42-some-show");
    }

    #[test]
    fn test_episode_ref_display() {
        let ep = EpisodeRef { season: 1, episode: 5 };
        assert_eq!(ep.to_string(), "S01E05");
    }

    #[test]
    fn test_format_resume() {
        assert_eq!(format_resume(0.0), "0:00");
        assert_eq!(format_resume(65.7), "1:05");
        assert_eq!(format_resume(600.0), "10:00");
    }
}
