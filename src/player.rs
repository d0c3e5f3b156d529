//! Simulated playback surface
//!
//! Holds the loaded source, play/pause state and the playhead, and feeds the
//! position to an observer once per whole second of playback, matching a
//! once-per-second timeupdate stream. There is no real decoding here; ticks
//! come from the main loop.

use std::sync::Arc;

use crate::models::PlaybackSource;
use crate::tracking::PlaybackObserver;

/// Playback state driven by main-loop ticks
pub struct Player {
    source: Option<PlaybackSource>,
    title_id: Option<u64>,
    playing: bool,
    position: f64,
    last_notified: Option<u64>,
    observer: Option<Arc<dyn PlaybackObserver>>,
}

impl Player {
    pub fn new() -> Self {
        Self {
            source: None,
            title_id: None,
            playing: false,
            position: 0.0,
            last_notified: None,
            observer: None,
        }
    }

    pub fn set_observer(&mut self, observer: Arc<dyn PlaybackObserver>) {
        self.observer = Some(observer);
    }

    /// Load a source for a title, optionally resuming at a saved position
    pub fn load(&mut self, title_id: u64, source: PlaybackSource, resume_at: Option<f64>) {
        self.source = Some(source);
        self.title_id = Some(title_id);
        self.position = resume_at.unwrap_or(0.0);
        self.playing = false;
        self.last_notified = None;
    }

    pub fn source(&self) -> Option<&PlaybackSource> {
        self.source.as_ref()
    }

    pub fn title_id(&self) -> Option<u64> {
        self.title_id
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn play(&mut self) {
        if self.source.is_some() {
            self.playing = true;
        }
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Jump the playhead; the next crossed second still notifies
    pub fn seek(&mut self, position: f64) {
        self.position = position.max(0.0);
        self.last_notified = None;
    }

    /// Advance the playhead by `dt` seconds while playing; emits one
    /// position update per newly reached whole second.
    pub fn tick(&mut self, dt: f64) {
        if !self.playing {
            return;
        }
        self.position += dt;

        let second = self.position.floor() as u64;
        if self.last_notified == Some(second) {
            return;
        }
        self.last_notified = Some(second);

        if let (Some(observer), Some(title_id)) = (&self.observer, self.title_id) {
            observer.position_changed(title_id, self.position);
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
