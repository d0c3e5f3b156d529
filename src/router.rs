//! Path-based navigation
//!
//! Pages are addressed by URL-style paths. `Route::parse` classifies a path;
//! the `Router` keeps the current route plus a history stack so Back returns
//! to the previously shown page. Unrecognized paths land on a real NotFound
//! route instead of being rejected.

use regex::Regex;

/// A recognized page address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    MovieArchive,
    SeriesArchive,
    /// Title page; only the numeric id matters, any trailing slug is cosmetic
    Title { id: u64 },
    NotFound,
}

impl Route {
    /// Classify a path. Never fails: anything unrecognized is `NotFound`.
    pub fn parse(path: &str) -> Route {
        match path {
            "/" | "/index.html" => return Route::Home,
            "/movies" => return Route::MovieArchive,
            "/series" => return Route::SeriesArchive,
            _ => {}
        }

        if let Ok(re) = Regex::new(r"^/titles/(\d+)(?:-.*)?$") {
            if let Some(caps) = re.captures(path) {
                if let Ok(id) = caps[1].parse::<u64>() {
                    return Route::Title { id };
                }
            }
        }

        Route::NotFound
    }
}

/// Current route plus a back stack
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            current: Route::Home,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Seed the router at `path` without recording a history entry; used
    /// for the page shown at startup, which Back should not return to twice
    pub fn start_at(&mut self, path: &str) -> Route {
        self.current = Route::parse(path);
        self.current
    }

    /// Move to the route for `path`, pushing the current route onto history
    pub fn navigate(&mut self, path: &str) -> Route {
        let route = Route::parse(path);
        self.history.push(self.current);
        self.current = route;
        route
    }

    /// Pop back to the previous route; stays on Home when history is empty
    pub fn back(&mut self) -> Route {
        if let Some(previous) = self.history.pop() {
            self.current = previous;
        }
        self.current
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_home_aliases() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/index.html"), Route::Home);
    }

    #[test]
    fn test_parse_archives() {
        assert_eq!(Route::parse("/movies"), Route::MovieArchive);
        assert_eq!(Route::parse("/series"), Route::SeriesArchive);
    }

    #[test]
    fn test_parse_title_with_slug() {
        assert_eq!(
            Route::parse("/titles/42-some-show"),
            Route::Title { id: 42 }
        );
        assert_eq!(
            Route::parse("/titles/414906-the-batman"),
            Route::Title { id: 414906 }
        );
    }

    #[test]
    fn test_parse_title_bare_id() {
        assert_eq!(Route::parse("/titles/42"), Route::Title { id: 42 });
    }

    #[test]
    fn test_parse_unknown_paths() {
        assert_eq!(Route::parse("/nope"), Route::NotFound);
        assert_eq!(Route::parse("/titles/abc-show"), Route::NotFound);
        assert_eq!(Route::parse("/titles/"), Route::NotFound);
        assert_eq!(Route::parse(""), Route::NotFound);
        assert_eq!(Route::parse("/movies/extra"), Route::NotFound);
    }

    #[test]
    fn test_start_at_records_no_history() {
        let mut router = Router::new();
        router.start_at("/movies");
        assert_eq!(router.current(), Route::MovieArchive);

        // Nothing to go back to from the startup page
        assert_eq!(router.back(), Route::MovieArchive);
    }

    #[test]
    fn test_navigate_and_back() {
        let mut router = Router::new();
        assert_eq!(router.current(), Route::Home);

        router.navigate("/movies");
        router.navigate("/titles/42-x");
        assert_eq!(router.current(), Route::Title { id: 42 });

        assert_eq!(router.back(), Route::MovieArchive);
        assert_eq!(router.back(), Route::Home);

        // Empty history keeps the current route
        assert_eq!(router.back(), Route::Home);
    }
}
