//! App state and core application logic
//!
//! Manages the page state machine behind the router, coordinates the
//! backend services (catalog, TMDB client, resolver, favorites, progress)
//! and handles keyboard input. Key handling is synchronous and returns an
//! `Action` when something needs async work; the main loop applies it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use futures::future::join_all;
use log::warn;
use std::sync::Arc;

use crate::api::TmdbClient;
use crate::cache::ResponseCache;
use crate::catalog::CatalogBuilder;
use crate::config::{Config, SAMPLE_VIDEO_URL};
use crate::models::{format_resume, CatalogEntry, PlaybackSource, TitleKind};
use crate::player::Player;
use crate::resolver::{ResolveError, TitleResolver};
use crate::router::{Route, Router};
use crate::selector::EpisodeSelector;
use crate::store::SharedStore;
use crate::tracking::{FavoritesStore, ProgressTracker};

// =============================================================================
// List Selection State
// =============================================================================

/// Selection state for card rows and pick lists
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Scroll offset for viewport
    pub offset: usize,
    /// Total number of items
    pub len: usize,
}

impl ListState {
    pub fn new(len: usize) -> Self {
        Self {
            selected: 0,
            offset: 0,
            len,
        }
    }

    pub fn prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            if self.selected < self.offset {
                self.offset = self.selected;
            }
        }
    }

    pub fn next(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    /// Update offset to keep selected item visible
    pub fn scroll_into_view(&mut self, visible: usize) {
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if visible > 0 && self.selected >= self.offset + visible {
            self.offset = self.selected - visible + 1;
        }
    }

    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

// =============================================================================
// Page State
// =============================================================================

/// One rendered title card
#[derive(Debug, Clone)]
pub struct Card {
    pub title_id: u64,
    pub title: String,
    pub poster_url: String,
    /// In-app path the card opens
    pub path: String,
    /// Saved playback position, shown as a resume label
    pub resume: Option<f64>,
}

impl Card {
    /// Resume label for the card footer, e.g. "Resume 1:05"
    pub fn resume_label(&self) -> Option<String> {
        self.resume.map(|s| format!("Resume {}", format_resume(s)))
    }
}

/// One horizontal card row on the home page
#[derive(Debug, Clone, Default)]
pub struct Row {
    pub title: String,
    pub cards: Vec<Card>,
    pub list: ListState,
}

impl Row {
    pub fn new(title: impl Into<String>, cards: Vec<Card>) -> Self {
        let list = ListState::new(cards.len());
        Self {
            title: title.into(),
            cards,
            list,
        }
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.cards.get(self.list.selected)
    }
}

/// Home page: continue-watching, favorites and full-catalog rows
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub rows: Vec<Row>,
    /// Index of the focused row
    pub row: usize,
}

impl HomeState {
    pub fn focused_row(&self) -> Option<&Row> {
        self.rows.get(self.row)
    }

    pub fn focused_row_mut(&mut self) -> Option<&mut Row> {
        self.rows.get_mut(self.row)
    }

    pub fn row_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
        }
    }

    pub fn row_down(&mut self) {
        if self.row + 1 < self.rows.len() {
            self.row += 1;
        }
    }
}

/// Archive page: the single-kind card grid
#[derive(Debug, Clone)]
pub struct ArchiveState {
    pub kind: TitleKind,
    pub cards: Vec<Card>,
    pub list: ListState,
}

impl ArchiveState {
    pub fn new(kind: TitleKind, cards: Vec<Card>) -> Self {
        let list = ListState::new(cards.len());
        Self { kind, cards, list }
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.cards.get(self.list.selected)
    }
}

/// Which control has focus on a series title page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleFocus {
    #[default]
    Seasons,
    Episodes,
}

/// Title page: resolved metadata plus the series selector when applicable
pub struct TitleState {
    pub id: u64,
    pub kind: TitleKind,
    pub title: String,
    pub overview: Option<String>,
    pub poster_url: String,
    pub favorite: bool,
    pub resume: Option<f64>,
    /// Present for series only
    pub selector: Option<EpisodeSelector>,
    pub focus: TitleFocus,
    pub season_list: ListState,
    pub episode_list: ListState,
}

/// Current page behind the router
pub enum Page {
    Home(HomeState),
    Archive(ArchiveState),
    Title(Box<TitleState>),
    NotFound,
}

// =============================================================================
// Actions
// =============================================================================

/// Work the key handler defers to the async main loop
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(String),
    Back,
    Quit,
    SelectSeason(u32),
    SelectEpisode(usize),
    ToggleFavorite,
    /// Start (or resume) playback of the current title page target
    Play,
    TogglePlayback,
    SeekBy(f64),
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state and service wiring
pub struct App {
    pub router: Router,
    pub page: Page,
    pub player: Player,
    pub running: bool,
    pub error: Option<String>,

    client: TmdbClient,
    catalog_builder: CatalogBuilder,
    catalog: Option<Vec<CatalogEntry>>,
    favorites: FavoritesStore,
    progress: Arc<ProgressTracker>,
}

impl App {
    /// Wire the services from config plus a shared store
    pub fn new(config: &Config, store: SharedStore) -> Self {
        let cache = ResponseCache::new(store.clone(), config.cache_ttl());
        let client = TmdbClient::new(config.tmdb_api_key(), config.language.clone(), cache);
        let progress = Arc::new(ProgressTracker::new(
            store.clone(),
            config.progress_interval_secs,
        ));

        let mut player = Player::new();
        player.set_observer(progress.clone());

        Self {
            router: Router::new(),
            page: Page::Home(HomeState::default()),
            player,
            running: true,
            error: None,
            client,
            catalog_builder: CatalogBuilder::new(&config.movies_file, &config.episodes_file),
            catalog: None,
            favorites: FavoritesStore::new(store),
            progress,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    // -------------------------------------------------------------------------
    // Navigation and Page Loading
    // -------------------------------------------------------------------------

    /// Load the first page without recording a history entry
    pub async fn start(&mut self, path: &str) {
        let route = self.router.start_at(path);
        self.load_route(route).await;
    }

    /// Navigate to `path` and load the matching page
    pub async fn open(&mut self, path: &str) {
        let route = self.router.navigate(path);
        self.load_route(route).await;
    }

    /// Pop history and reload the page it points at
    pub async fn go_back(&mut self) {
        let route = self.router.back();
        self.load_route(route).await;
    }

    async fn load_route(&mut self, route: Route) {
        self.error = None;
        match route {
            Route::Home => self.load_home().await,
            Route::MovieArchive => self.load_archive(TitleKind::Movie).await,
            Route::SeriesArchive => self.load_archive(TitleKind::Series).await,
            Route::Title { id } => self.load_title(id).await,
            Route::NotFound => self.page = Page::NotFound,
        }
    }

    /// Build and cache the merged catalog. Only a successful build is
    /// cached: a failed one surfaces as an error and the next navigation
    /// rebuilds, so a transient dataset problem recovers on its own.
    fn ensure_catalog(&mut self) -> &[CatalogEntry] {
        if self.catalog.is_none() {
            match self.catalog_builder.build() {
                Ok(entries) => self.catalog = Some(entries),
                Err(e) => {
                    self.error = Some(e.to_string());
                    return &[];
                }
            }
        }
        self.catalog.as_deref().unwrap_or(&[])
    }

    /// Fetch metadata for catalog entries concurrently; entries whose
    /// lookup fails are dropped from the rendered row after a log line.
    async fn entry_cards(&mut self, kind_filter: Option<TitleKind>) -> Vec<Card> {
        let targets: Vec<(TitleKind, u64)> = self
            .ensure_catalog()
            .iter()
            .filter(|e| kind_filter.map_or(true, |k| e.kind == k))
            .map(|e| (e.kind, e.tmdb_id))
            .collect();

        let lookups = targets.iter().map(|&(kind, id)| {
            let client = &self.client;
            async move {
                let result = match kind {
                    TitleKind::Movie => client.movie(id).await,
                    TitleKind::Series => client.series(id).await,
                };
                (id, result)
            }
        });

        let mut cards = Vec::with_capacity(targets.len());
        for (id, result) in join_all(lookups).await {
            match result {
                Ok(meta) => cards.push(Card {
                    title_id: meta.id,
                    title: meta.title.clone(),
                    poster_url: meta.poster_url(),
                    path: meta.title_path(),
                    resume: self.progress.progress(id),
                }),
                Err(e) => warn!("skipping title {}: {}", id, e),
            }
        }
        cards
    }

    /// Resolve a list of bare ids (favorites, continue-watching) to cards
    async fn resolved_cards(&self, ids: &[u64]) -> Vec<Card> {
        let resolver = TitleResolver::new(&self.client);
        let lookups = ids.iter().map(|&id| {
            let resolver = &resolver;
            async move { (id, resolver.resolve(id).await) }
        });

        let mut cards = Vec::with_capacity(ids.len());
        for (id, result) in join_all(lookups).await {
            match result {
                Ok(resolved) => cards.push(Card {
                    title_id: resolved.metadata.id,
                    title: resolved.metadata.title.clone(),
                    poster_url: resolved.metadata.poster_url(),
                    path: resolved.metadata.title_path(),
                    resume: self.progress.progress(id),
                }),
                Err(e) => warn!("skipping title {}: {}", id, e),
            }
        }
        cards
    }

    async fn load_home(&mut self) {
        let catalog_cards = self.entry_cards(None).await;

        let resumable: Vec<u64> = self
            .progress
            .continue_watching()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        let continue_cards = self.resolved_cards(&resumable).await;
        let favorite_cards = self.resolved_cards(&self.favorites.all()).await;

        let mut rows = Vec::new();
        if !continue_cards.is_empty() {
            rows.push(Row::new("Continue Watching", continue_cards));
        }
        if !favorite_cards.is_empty() {
            rows.push(Row::new("My List", favorite_cards));
        }
        rows.push(Row::new("All Titles", catalog_cards));

        self.page = Page::Home(HomeState { rows, row: 0 });
    }

    async fn load_archive(&mut self, kind: TitleKind) {
        let cards = self.entry_cards(Some(kind)).await;
        self.page = Page::Archive(ArchiveState::new(kind, cards));
    }

    async fn load_title(&mut self, id: u64) {
        let resolved = match TitleResolver::new(&self.client).resolve(id).await {
            Ok(resolved) => resolved,
            Err(ResolveError::NotFound(_)) => {
                self.page = Page::NotFound;
                return;
            }
            Err(ResolveError::Transport(e)) => {
                // Retryable fault: keep the current page and surface it
                self.set_error(format!("Failed to load title {}: {}", id, e));
                return;
            }
        };

        let selector = match resolved.kind {
            TitleKind::Movie => None,
            TitleKind::Series => {
                let episodes = self
                    .ensure_catalog()
                    .iter()
                    .find(|e| e.kind == TitleKind::Series && e.tmdb_id == id)
                    .map(|e| e.episodes.clone())
                    .unwrap_or_default();
                let mut selector = EpisodeSelector::new(episodes);
                self.fill_episode_labels(id, &mut selector).await;
                Some(selector)
            }
        };

        let season_len = selector.as_ref().map_or(0, |s| s.seasons().len());
        let episode_len = selector.as_ref().map_or(0, |s| s.options().len());

        self.page = Page::Title(Box::new(TitleState {
            id,
            kind: resolved.kind,
            title: resolved.metadata.title.clone(),
            overview: resolved.metadata.overview.clone(),
            poster_url: resolved.metadata.poster_url_original(),
            favorite: self.favorites.is_favorite(id),
            resume: self.progress.progress(id),
            selector,
            focus: TitleFocus::default(),
            season_list: ListState::new(season_len),
            episode_list: ListState::new(episode_len),
        }));
    }

    /// Replace the selector's fallback labels with fetched episode names.
    /// A failed or nameless lookup keeps the numbered fallback.
    async fn fill_episode_labels(&self, series_id: u64, selector: &mut EpisodeSelector) {
        let picks: Vec<(usize, u32, u32)> = selector
            .options()
            .iter()
            .enumerate()
            .map(|(i, o)| (i, o.season, o.episode))
            .collect();

        let lookups = picks.iter().map(|&(i, season, episode)| {
            let client = &self.client;
            async move { (i, client.episode(series_id, season, episode).await) }
        });

        for (i, result) in join_all(lookups).await {
            match result {
                Ok(info) => {
                    if let Some(name) = info.name {
                        selector.set_label(i, name);
                    }
                }
                Err(e) => warn!("episode lookup failed for series {}: {}", series_id, e),
            }
        }
    }

    // -------------------------------------------------------------------------
    // Deferred Actions
    // -------------------------------------------------------------------------

    /// Apply an action produced by the key handler
    pub async fn apply(&mut self, action: Action) {
        match action {
            Action::Navigate(path) => self.open(&path).await,
            Action::Back => self.go_back().await,
            Action::Quit => self.quit(),
            Action::SelectSeason(season) => {
                // Take the selector out of the page so label fetching can
                // borrow the client without holding the page
                let taken = match &mut self.page {
                    Page::Title(state) => state.selector.take().map(|mut selector| {
                        selector.select_season(season);
                        state.episode_list = ListState::new(selector.options().len());
                        (state.id, selector)
                    }),
                    _ => None,
                };
                if let Some((id, mut selector)) = taken {
                    self.fill_episode_labels(id, &mut selector).await;
                    if let Page::Title(state) = &mut self.page {
                        state.selector = Some(selector);
                    }
                }
            }
            Action::SelectEpisode(index) => {
                if let Page::Title(state) = &mut self.page {
                    if let Some(selector) = &mut state.selector {
                        selector.select_episode(index);
                    }
                }
            }
            Action::ToggleFavorite => {
                if let Page::Title(state) = &mut self.page {
                    state.favorite = self.favorites.toggle(state.id);
                }
            }
            Action::Play => self.start_playback(),
            Action::TogglePlayback => self.player.toggle(),
            Action::SeekBy(delta) => {
                let target = self.player.position() + delta;
                self.player.seek(target);
            }
        }
    }

    /// Load the current title page's target into the player and start it
    fn start_playback(&mut self) {
        let Page::Title(state) = &self.page else {
            return;
        };

        let source = match (&state.kind, &state.selector) {
            (TitleKind::Movie, _) => Some(PlaybackSource {
                url: SAMPLE_VIDEO_URL.to_string(),
                title: state.title.clone(),
            }),
            (TitleKind::Series, Some(selector)) => selector.playback_source(&state.title),
            (TitleKind::Series, None) => None,
        };

        if let Some(source) = source {
            self.player
                .load(state.id, source, self.progress.progress(state.id));
            self.player.play();
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle a key event; local list movement happens here, anything
    /// needing async work comes back as an `Action`.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        self.error = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Esc => return Some(Action::Back),
            KeyCode::Char('h') => return Some(Action::Navigate("/".into())),
            KeyCode::Char('m') => return Some(Action::Navigate("/movies".into())),
            KeyCode::Char('t') => return Some(Action::Navigate("/series".into())),
            _ => {}
        }

        // Player shortcuts work from any page once a source is loaded
        if self.player.source().is_some() {
            match key.code {
                KeyCode::Char(' ') => return Some(Action::TogglePlayback),
                KeyCode::Char('[') => return Some(Action::SeekBy(-10.0)),
                KeyCode::Char(']') => return Some(Action::SeekBy(10.0)),
                _ => {}
            }
        }

        match &mut self.page {
            Page::Home(state) => Self::handle_home_key(state, key),
            Page::Archive(state) => Self::handle_archive_key(state, key),
            Page::Title(state) => Self::handle_title_key(state, key),
            Page::NotFound => None,
        }
    }

    fn handle_home_key(state: &mut HomeState, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                state.row_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                state.row_down();
                None
            }
            KeyCode::Left => {
                if let Some(row) = state.focused_row_mut() {
                    row.list.prev();
                }
                None
            }
            KeyCode::Right => {
                if let Some(row) = state.focused_row_mut() {
                    row.list.next();
                }
                None
            }
            KeyCode::Enter => state
                .focused_row()
                .and_then(Row::selected_card)
                .map(|card| Action::Navigate(card.path.clone())),
            _ => None,
        }
    }

    fn handle_archive_key(state: &mut ArchiveState, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Left => {
                state.list.prev();
                None
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Right => {
                state.list.next();
                None
            }
            KeyCode::Enter => state
                .selected_card()
                .map(|card| Action::Navigate(card.path.clone())),
            _ => None,
        }
    }

    fn handle_title_key(state: &mut TitleState, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('f') => Some(Action::ToggleFavorite),
            KeyCode::Enter | KeyCode::Char('p') => Some(Action::Play),
            KeyCode::Tab if state.selector.is_some() => {
                state.focus = match state.focus {
                    TitleFocus::Seasons => TitleFocus::Episodes,
                    TitleFocus::Episodes => TitleFocus::Seasons,
                };
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                match state.focus {
                    TitleFocus::Seasons => state.season_list.prev(),
                    TitleFocus::Episodes => state.episode_list.prev(),
                }
                Self::title_selection_action(state)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                match state.focus {
                    TitleFocus::Seasons => state.season_list.next(),
                    TitleFocus::Episodes => state.episode_list.next(),
                }
                Self::title_selection_action(state)
            }
            _ => None,
        }
    }

    /// Translate a moved season/episode highlight into a selector action
    fn title_selection_action(state: &TitleState) -> Option<Action> {
        let selector = state.selector.as_ref()?;
        match state.focus {
            TitleFocus::Seasons => selector
                .seasons()
                .get(state.season_list.selected)
                .map(|&season| Action::SelectSeason(season)),
            TitleFocus::Episodes => Some(Action::SelectEpisode(state.episode_list.selected)),
        }
    }

    /// Advance simulated playback; called from the main loop tick
    pub fn tick(&mut self, dt: f64) {
        self.player.tick(dt);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn test_app() -> App {
        App::new(&Config::default(), MemoryStore::shared())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    // -------------------------------------------------------------------------
    // ListState Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_list_state_bounds() {
        let mut list = ListState::new(3);
        list.prev();
        assert_eq!(list.selected, 0);

        list.next();
        list.next();
        list.next();
        assert_eq!(list.selected, 2);
    }

    #[test]
    fn test_list_state_set_len_clamps() {
        let mut list = ListState::new(10);
        list.selected = 8;
        list.set_len(5);
        assert_eq!(list.selected, 4);
        list.set_len(0);
        assert_eq!(list.selected, 0);
    }

    #[test]
    fn test_list_state_scroll_into_view() {
        let mut list = ListState::new(20);
        list.selected = 12;
        list.scroll_into_view(5);
        assert_eq!(list.offset, 8);

        list.selected = 3;
        list.scroll_into_view(5);
        assert_eq!(list.offset, 3);
    }

    // -------------------------------------------------------------------------
    // Key Handling Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        assert_eq!(app.handle_key(press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_navigation_shortcuts() {
        let mut app = test_app();
        assert_eq!(
            app.handle_key(press(KeyCode::Char('m'))),
            Some(Action::Navigate("/movies".into()))
        );
        assert_eq!(
            app.handle_key(press(KeyCode::Char('t'))),
            Some(Action::Navigate("/series".into()))
        );
        assert_eq!(app.handle_key(press(KeyCode::Esc)), Some(Action::Back));
    }

    #[test]
    fn test_home_enter_opens_selected_card() {
        let mut app = test_app();
        let card = Card {
            title_id: 42,
            title: "Some Show".into(),
            poster_url: String::new(),
            path: "/titles/42-some-show".into(),
            resume: None,
        };
        app.page = Page::Home(HomeState {
            rows: vec![Row::new("All Titles", vec![card])],
            row: 0,
        });

        assert_eq!(
            app.handle_key(press(KeyCode::Enter)),
            Some(Action::Navigate("/titles/42-some-show".into()))
        );
    }

    #[test]
    fn test_home_row_and_card_movement() {
        let mut app = test_app();
        let card = |id: u64| Card {
            title_id: id,
            title: id.to_string(),
            poster_url: String::new(),
            path: format!("/titles/{}", id),
            resume: None,
        };
        app.page = Page::Home(HomeState {
            rows: vec![
                Row::new("A", vec![card(1), card(2)]),
                Row::new("B", vec![card(3)]),
            ],
            row: 0,
        });

        app.handle_key(press(KeyCode::Right));
        app.handle_key(press(KeyCode::Down));
        if let Page::Home(state) = &app.page {
            assert_eq!(state.row, 1);
            assert_eq!(state.rows[0].list.selected, 1);
        } else {
            panic!("expected home page");
        }
    }

    #[test]
    fn test_title_favorite_and_play_keys() {
        let mut app = test_app();
        app.page = Page::Title(Box::new(TitleState {
            id: 7,
            kind: TitleKind::Movie,
            title: "X".into(),
            overview: None,
            poster_url: String::new(),
            favorite: false,
            resume: None,
            selector: None,
            focus: TitleFocus::default(),
            season_list: ListState::default(),
            episode_list: ListState::default(),
        }));

        assert_eq!(
            app.handle_key(press(KeyCode::Char('f'))),
            Some(Action::ToggleFavorite)
        );
        assert_eq!(app.handle_key(press(KeyCode::Enter)), Some(Action::Play));
    }

    #[tokio::test]
    async fn test_toggle_favorite_updates_page_and_store() {
        let mut app = test_app();
        app.page = Page::Title(Box::new(TitleState {
            id: 7,
            kind: TitleKind::Movie,
            title: "X".into(),
            overview: None,
            poster_url: String::new(),
            favorite: false,
            resume: None,
            selector: None,
            focus: TitleFocus::default(),
            season_list: ListState::default(),
            episode_list: ListState::default(),
        }));

        app.apply(Action::ToggleFavorite).await;
        if let Page::Title(state) = &app.page {
            assert!(state.favorite);
        } else {
            panic!("expected title page");
        }

        app.apply(Action::ToggleFavorite).await;
        if let Page::Title(state) = &app.page {
            assert!(!state.favorite);
        } else {
            panic!("expected title page");
        }
    }

    #[tokio::test]
    async fn test_play_loads_movie_source() {
        let mut app = test_app();
        app.page = Page::Title(Box::new(TitleState {
            id: 7,
            kind: TitleKind::Movie,
            title: "The Batman".into(),
            overview: None,
            poster_url: String::new(),
            favorite: false,
            resume: None,
            selector: None,
            focus: TitleFocus::default(),
            season_list: ListState::default(),
            episode_list: ListState::default(),
        }));

        app.apply(Action::Play).await;
        assert!(app.player.is_playing());
        assert_eq!(app.player.title_id(), Some(7));
        assert_eq!(app.player.source().unwrap().url, SAMPLE_VIDEO_URL);
    }

    #[tokio::test]
    async fn test_unknown_path_lands_on_not_found() {
        let mut app = test_app();
        app.open("/definitely/not/a/page").await;
        assert!(matches!(app.page, Page::NotFound));
    }

    #[tokio::test]
    async fn test_start_page_is_not_its_own_back_target() {
        let mut app = test_app();
        app.start("/definitely/not/a/page").await;
        assert!(matches!(app.page, Page::NotFound));

        // Back from the startup page stays put instead of reloading it
        app.go_back().await;
        assert_eq!(app.router.current(), Route::NotFound);
    }

    #[tokio::test]
    async fn test_failed_catalog_build_retries_on_next_navigation() {
        let dir = std::env::temp_dir().join(format!(
            "darkflix-app-retry-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let config = Config {
            movies_file: dir.join("filmids.json"),
            episodes_file: dir.join("serietv.json"),
            ..Default::default()
        };
        let mut app = App::new(&config, MemoryStore::shared());

        // Datasets missing: the build fails and the error surfaces
        app.open("/movies").await;
        assert!(app.error.is_some());

        // Still missing on the next navigation: the error surfaces again
        app.open("/movies").await;
        assert!(app.error.is_some());

        // Datasets appear: the next navigation rebuilds and succeeds
        std::fs::write(dir.join("filmids.json"), "[]").unwrap();
        std::fs::write(dir.join("serietv.json"), "[]").unwrap();
        app.open("/movies").await;
        assert!(app.error.is_none());

        let _ = std::fs::remove_dir_all(dir);
    }
}
