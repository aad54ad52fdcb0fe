//! Screen routing
//!
//! Each screen has a canonical path: `/`, `/favourites` and `/shows/:id`.

use std::fmt;

/// The screen currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Favourites,
    Show { id: u64 },
}

impl Route {
    /// Parse a path into a route
    ///
    /// Trailing slashes are ignored. Unknown paths and non-numeric show ids
    /// yield `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Home),
            "/favourites" => Some(Route::Favourites),
            _ => {
                let id = trimmed.strip_prefix("/shows/")?;
                if id.contains('/') {
                    return None;
                }
                id.parse().ok().map(|id| Route::Show { id })
            }
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Favourites => "/favourites".to_string(),
            Route::Show { id } => format!("/shows/{}", id),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Favourites => "favourites",
            Route::Show { .. } => "show",
        }
    }

    /// Title used for the navigation tabs
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Favourites => "Favourites",
            Route::Show { .. } => "Details",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/favourites"), Some(Route::Favourites));
        assert_eq!(Route::parse("/favourites/"), Some(Route::Favourites));
        assert_eq!(Route::parse("/shows/42"), Some(Route::Show { id: 42 }));
    }

    #[test]
    fn test_parse_rejects_unknown_paths() {
        assert_eq!(Route::parse("/shows/abc"), None);
        assert_eq!(Route::parse("/shows/"), None);
        assert_eq!(Route::parse("/shows/1/cast"), None);
        assert_eq!(Route::parse("/settings"), None);
    }

    #[test]
    fn test_path_parse_agree() {
        for route in [Route::Home, Route::Favourites, Route::Show { id: 7 }] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_route_names() {
        assert_eq!(Route::Home.name(), "home");
        assert_eq!(Route::Favourites.name(), "favourites");
        assert_eq!(Route::Show { id: 1 }.name(), "show");
    }
}
