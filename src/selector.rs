//! Season and episode selection for series title pages
//!
//! Turns the raw (season, episode) pairs of a catalog entry into the ordered
//! two-level pick list the title page shows: distinct seasons ascending, then
//! that season's episodes ascending. Selecting a season auto-selects its
//! first episode so the page always has a playable target.

use crate::config::SAMPLE_VIDEO_URL;
use crate::models::{EpisodeRef, PlaybackSource};

/// One entry of the episode pick list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeOption {
    pub season: u32,
    pub episode: u32,
    pub label: String,
}

/// Selection state for one series
pub struct EpisodeSelector {
    episodes: Vec<EpisodeRef>,
    seasons: Vec<u32>,
    selected_season: Option<u32>,
    options: Vec<EpisodeOption>,
    selected_episode: Option<usize>,
}

impl EpisodeSelector {
    /// Build the selector and auto-select the first season (with a bare
    /// numbered pick list; callers overwrite labels once names arrive).
    pub fn new(episodes: Vec<EpisodeRef>) -> Self {
        let mut seasons: Vec<u32> = episodes.iter().map(|e| e.season).collect();
        seasons.sort_unstable();
        seasons.dedup();

        let mut selector = Self {
            episodes,
            seasons,
            selected_season: None,
            options: Vec::new(),
            selected_episode: None,
        };
        if let Some(&first) = selector.seasons.first() {
            selector.select_season(first);
        }
        selector
    }

    /// A series with no episode records renders a placeholder instead of
    /// season and episode controls
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    pub fn seasons(&self) -> &[u32] {
        &self.seasons
    }

    pub fn selected_season(&self) -> Option<u32> {
        self.selected_season
    }

    pub fn options(&self) -> &[EpisodeOption] {
        &self.options
    }

    pub fn selected_episode(&self) -> Option<&EpisodeOption> {
        self.selected_episode.and_then(|i| self.options.get(i))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_episode
    }

    /// Episode numbers of `season`, sorted ascending
    pub fn season_episodes(&self, season: u32) -> Vec<u32> {
        let mut numbers: Vec<u32> = self
            .episodes
            .iter()
            .filter(|e| e.season == season)
            .map(|e| e.episode)
            .collect();
        numbers.sort_unstable();
        numbers
    }

    /// Switch season: rebuilds the pick list with fallback labels and
    /// auto-selects its first episode. Unknown seasons are ignored.
    pub fn select_season(&mut self, season: u32) {
        if !self.seasons.contains(&season) {
            return;
        }
        self.selected_season = Some(season);
        self.options = self
            .season_episodes(season)
            .into_iter()
            .map(|episode| EpisodeOption {
                season,
                episode,
                label: format!("Episode {}", episode),
            })
            .collect();
        self.selected_episode = if self.options.is_empty() { None } else { Some(0) };
    }

    /// Pick an episode by pick-list index; out-of-range picks are ignored
    pub fn select_episode(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected_episode = Some(index);
        }
    }

    /// Replace one option's label with a fetched episode name
    pub fn set_label(&mut self, index: usize, label: String) {
        if let Some(option) = self.options.get_mut(index) {
            option.label = label;
        }
    }

    /// Playback source for the current pick. Every episode maps to the
    /// sample video until real sources are wired up.
    pub fn playback_source(&self, series_title: &str) -> Option<PlaybackSource> {
        let option = self.selected_episode()?;
        Some(PlaybackSource {
            url: SAMPLE_VIDEO_URL.to_string(),
            title: format!(
                "{} S{:02}E{:02} {}",
                series_title, option.season, option.episode, option.label
            ),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
