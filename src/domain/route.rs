//! Logical routes between the two views.
//!
//! The plugin has exactly two places to be: the search screen at `/` and a
//! details screen at `/movie/{id}`. Routes round-trip through these path strings
//! so a start location can be supplied from configuration.

use super::error::{MovieSearchError, Result};
use std::fmt;

const DETAILS_PREFIX: &str = "/movie/";

/// Current location within the plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Root search screen.
    Search,
    /// Details screen for one title.
    Details {
        /// Opaque identifier segment, e.g. `tt0133093`.
        id: String,
    },
}

impl Route {
    /// Builds a details route, rejecting identifiers that cannot form a path segment.
    ///
    /// # Errors
    ///
    /// Returns [`MovieSearchError::Route`] if `id` is empty or contains `/` or
    /// whitespace.
    pub fn details(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() || id.contains('/') || id.chars().any(char::is_whitespace) {
            return Err(MovieSearchError::Route(format!("{DETAILS_PREFIX}{id}")));
        }
        Ok(Self::Details { id })
    }

    /// Parses a route path.
    ///
    /// A trailing slash is tolerated on both routes.
    ///
    /// # Errors
    ///
    /// Returns [`MovieSearchError::Route`] for unknown paths or a details path
    /// without an identifier.
    ///
    /// ```
    /// use moviesearch::domain::Route;
    ///
    /// assert_eq!(Route::parse("/").unwrap(), Route::Search);
    /// assert_eq!(
    ///     Route::parse("/movie/tt0133093").unwrap(),
    ///     Route::Details { id: "tt0133093".to_string() }
    /// );
    /// assert!(Route::parse("/movie/").is_err());
    /// ```
    pub fn parse(path: &str) -> Result<Self> {
        let path = path.trim();
        if path.is_empty() || path == "/" {
            return Ok(Self::Search);
        }

        path.strip_prefix(DETAILS_PREFIX).map_or_else(
            || Err(MovieSearchError::Route(path.to_string())),
            |rest| Self::details(rest.strip_suffix('/').unwrap_or(rest)),
        )
    }

    /// Path form of this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Search => "/".to_string(),
            Self::Details { id } => format!("{DETAILS_PREFIX}{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_root_and_blank_as_search() {
        assert_eq!(Route::parse("/").ok(), Some(Route::Search));
        assert_eq!(Route::parse("").ok(), Some(Route::Search));
    }

    #[test]
    fn parses_details_with_trailing_slash() {
        assert_eq!(
            Route::parse("/movie/tt0133093/").ok(),
            Some(Route::Details { id: "tt0133093".into() })
        );
    }

    #[test]
    fn rejects_missing_identifier() {
        assert!(matches!(Route::parse("/movie/"), Err(MovieSearchError::Route(_))));
        assert!(matches!(Route::parse("/movie"), Err(MovieSearchError::Route(_))));
    }

    #[test]
    fn rejects_nested_identifier() {
        assert!(Route::parse("/movie/tt1/extra").is_err());
    }

    #[test]
    fn rejects_unknown_path() {
        assert!(matches!(Route::parse("/series/tt1"), Err(MovieSearchError::Route(_))));
    }

    #[test]
    fn path_formats_details() {
        let route = Route::details("tt0133093").ok();
        assert_eq!(route.map(|r| r.to_string()), Some("/movie/tt0133093".to_string()));
    }
}
