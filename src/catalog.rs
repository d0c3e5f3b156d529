//! Catalog assembly from the two local datasets
//!
//! Merges the flat movie-id list and the per-episode series records into one
//! ordered catalog: movies in source order, then one series per distinct id
//! in first-appearance order, each carrying its raw (season, episode) pairs.
//! A failure loading either source aborts the whole build.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{CatalogEntry, EpisodeRef};

/// One record of the movie-id dataset (`filmids.json`)
#[derive(Debug, Clone, Deserialize)]
pub struct MovieRecord {
    pub tmdb_id: u64,
}

/// One record of the episode dataset (`serietv.json`)
#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeRecord {
    pub tmdb_id: u64,
    pub s: u32,
    pub e: u32,
}

/// Catalog construction errors; any of these means no partial catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Builds the merged catalog from the two dataset files
pub struct CatalogBuilder {
    movies_path: PathBuf,
    episodes_path: PathBuf,
}

impl CatalogBuilder {
    pub fn new(movies_path: impl Into<PathBuf>, episodes_path: impl Into<PathBuf>) -> Self {
        Self {
            movies_path: movies_path.into(),
            episodes_path: episodes_path.into(),
        }
    }

    /// Load both datasets and assemble the ordered catalog
    pub fn build(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        let movies: Vec<MovieRecord> = load_json(&self.movies_path)?;
        let episodes: Vec<EpisodeRecord> = load_json(&self.episodes_path)?;
        Ok(assemble(&movies, &episodes))
    }
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Pure merge step: movies first (source order), then series grouped by id
/// in first-appearance order with raw episode pairs in source order.
/// Duplicate (season, episode) pairs are neither collapsed nor dropped.
pub fn assemble(movies: &[MovieRecord], episodes: &[EpisodeRecord]) -> Vec<CatalogEntry> {
    let mut entries: Vec<CatalogEntry> = movies
        .iter()
        .map(|m| CatalogEntry::movie(m.tmdb_id))
        .collect();

    let mut groups: Vec<(u64, Vec<EpisodeRef>)> = Vec::new();
    let mut index: HashMap<u64, usize> = HashMap::new();
    for record in episodes {
        let ep = EpisodeRef {
            season: record.s,
            episode: record.e,
        };
        match index.get(&record.tmdb_id) {
            Some(&i) => groups[i].1.push(ep),
            None => {
                index.insert(record.tmdb_id, groups.len());
                groups.push((record.tmdb_id, vec![ep]));
            }
        }
    }

    entries.extend(
        groups
            .into_iter()
            .map(|(id, eps)| CatalogEntry::series(id, eps)),
    );
    entries
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TitleKind;

    fn movie(id: u64) -> MovieRecord {
        MovieRecord { tmdb_id: id }
    }

    fn episode(id: u64, s: u32, e: u32) -> EpisodeRecord {
        EpisodeRecord { tmdb_id: id, s, e }
    }

    #[test]
    fn test_assemble_preserves_movie_order() {
        let catalog = assemble(&[movie(30), movie(10), movie(20)], &[]);
        let ids: Vec<u64> = catalog.iter().map(|e| e.tmdb_id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
        assert!(catalog.iter().all(|e| e.kind == TitleKind::Movie));
    }

    #[test]
    fn test_assemble_groups_series_by_first_appearance() {
        let catalog = assemble(
            &[],
            &[
                episode(200, 1, 1),
                episode(100, 1, 1),
                episode(200, 1, 2),
                episode(100, 2, 1),
            ],
        );
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].tmdb_id, 200);
        assert_eq!(catalog[1].tmdb_id, 100);
        assert_eq!(
            catalog[0].episodes,
            vec![
                EpisodeRef { season: 1, episode: 1 },
                EpisodeRef { season: 1, episode: 2 }
            ]
        );
    }

    #[test]
    fn test_assemble_movies_before_series() {
        let catalog = assemble(&[movie(1)], &[episode(2, 1, 1)]);
        assert_eq!(catalog[0].kind, TitleKind::Movie);
        assert_eq!(catalog[1].kind, TitleKind::Series);
    }

    #[test]
    fn test_assemble_keeps_raw_episode_order_and_duplicates() {
        let catalog = assemble(
            &[],
            &[
                episode(5, 1, 3),
                episode(5, 1, 1),
                episode(5, 1, 3), // duplicate pair stays
            ],
        );
        assert_eq!(catalog[0].episodes.len(), 3);
        assert_eq!(catalog[0].episodes[0], EpisodeRef { season: 1, episode: 3 });
        assert_eq!(catalog[0].episodes[2], EpisodeRef { season: 1, episode: 3 });
    }

    #[test]
    fn test_build_missing_file_aborts() {
        let builder = CatalogBuilder::new("/nonexistent/filmids.json", "/nonexistent/serietv.json");
        assert!(matches!(builder.build(), Err(CatalogError::Io { .. })));
    }
}
