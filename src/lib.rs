//! MovieSearch: a Zellij plugin for looking up movies.
//!
//! - Debounced title search with a bounded suggestion list
//! - A details screen per movie, with entrance and exit transitions
//! - A light/dark theme toggle shared by every screen
//! - Lookups against the OMDb web service through Zellij's `web_request`

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling and task scheduling               │
//! │  - Search and details views                         │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Lookup Layer  │   │ Domain        │
//! │ (ui/)         │   │ (omdb/)       │   │ (domain/)     │
//! │ - Rendering   │   │ - URLs        │   │ - Movies      │
//! │ - Themes      │   │ - Decoding    │   │ - Routes      │
//! │ - Components  │   │ - Context     │   │ - Errors      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry spans to a rotating JSON-lines file│
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/moviesearch.wasm" {
//!         api_key "abcd1234"
//!         dark_mode "true"
//!         stale_responses "latest"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Load**: parse configuration, start tracing, build `AppState`, request
//!    web access, subscribe to key, timer, and web response events
//! 2. **Permission granted**: navigate to `start_route`
//! 3. **Typing**: each key restarts the 300 ms quiet period; the settled query
//!    (3+ characters) becomes one lookup
//! 4. **Responses**: routed back to the issuing view by the echoed request
//!    context, decoded, applied
//! 5. **Render**: view model → components → ANSI frame

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod omdb;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, SearchFocus, StalePolicy};
pub use domain::{MovieSearchError, Result, Route};
pub use ui::{Theme, ThemeSet};

use omdb::{OmdbClient, DEFAULT_BASE_URL};
use std::collections::BTreeMap;

/// Environment variable consulted when `api_key` is not configured.
pub const API_KEY_ENV: &str = "OMDB_API_KEY";

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone)]
pub struct Config {
    /// OMDb API key. Without one the plugin shows a notice and issues no lookups.
    pub api_key: Option<String>,

    /// Lookup service base URL. Default: `https://www.omdbapi.com`
    pub base_url: String,

    /// Start in the dark theme.
    pub dark_mode: bool,

    /// What to do with search responses overtaken by a newer lookup.
    pub stale_policy: StalePolicy,

    /// TOML palette replacing the built-in light theme.
    pub light_theme_file: Option<String>,

    /// TOML palette replacing the built-in dark theme.
    pub dark_theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: Option<String>,

    /// Route opened once web access is granted. Default: `/`
    pub start_route: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            dark_mode: false,
            stale_policy: StalePolicy::default(),
            light_theme_file: None,
            dark_theme_file: None,
            trace_level: None,
            start_route: "/".to_string(),
        }
    }
}

impl Config {
    /// Parses Zellij's configuration map, falling back to `OMDB_API_KEY` for
    /// the API key.
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        Self::from_map(config, std::env::var(API_KEY_ENV).ok())
    }

    /// Parses a configuration map with an explicit fallback API key.
    ///
    /// Unparseable values are logged and replaced by their defaults.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use moviesearch::{Config, StalePolicy};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_key".to_string(), "abcd1234".to_string());
    /// map.insert("stale_responses".to_string(), "latest".to_string());
    ///
    /// let config = Config::from_map(&map, None);
    /// assert_eq!(config.api_key.as_deref(), Some("abcd1234"));
    /// assert_eq!(config.stale_policy, StalePolicy::Latest);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>, env_api_key: Option<String>) -> Self {
        let non_blank = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let dark_mode = non_blank("dark_mode").map_or(false, |v| match v.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => true,
            "false" | "no" | "off" | "0" => false,
            other => {
                tracing::warn!(dark_mode = %other, "unrecognised dark_mode, using light theme");
                false
            }
        });

        let stale_policy = non_blank("stale_responses").map_or_else(StalePolicy::default, |v| {
            StalePolicy::parse(&v).unwrap_or_else(|| {
                tracing::warn!(stale_responses = %v, "unrecognised stale_responses, applying in arrival order");
                StalePolicy::default()
            })
        });

        Self {
            api_key: non_blank("api_key").or_else(|| env_api_key.filter(|k| !k.trim().is_empty())),
            base_url: non_blank("base_url").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            dark_mode,
            stale_policy,
            light_theme_file: non_blank("light_theme_file"),
            dark_theme_file: non_blank("dark_theme_file"),
            trace_level: non_blank("trace_level"),
            start_route: non_blank("start_route").unwrap_or_else(|| "/".to_string()),
        }
    }
}

/// Builds the initial `AppState` from configuration.
///
/// Loads the theme palettes and the lookup client. A missing or unusable API
/// key is logged and leaves the client unset.
///
/// ```rust
/// use moviesearch::{initialize, Config, Route};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.route(), Route::Search);
/// assert!(state.client.is_none());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing moviesearch plugin");

    let themes = ThemeSet::load(config.light_theme_file.as_deref(), config.dark_theme_file.as_deref());

    let client = match &config.api_key {
        Some(key) => OmdbClient::new(key.clone(), config.base_url.clone())
            .map_err(|e| tracing::error!(error = %e, "lookup client unavailable"))
            .ok(),
        None => {
            tracing::error!("no API key configured; set api_key or {API_KEY_ENV}");
            None
        }
    };

    AppState::new(client, themes, config.dark_mode).with_stale_policy(config.stale_policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn defaults_apply_to_empty_map() {
        let config = Config::from_map(&BTreeMap::new(), None);
        assert_eq!(config.api_key, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(!config.dark_mode);
        assert_eq!(config.stale_policy, StalePolicy::Apply);
        assert_eq!(config.start_route, "/");
    }

    #[test]
    fn configured_key_beats_environment() {
        let config = Config::from_map(&map(&[("api_key", "from-kdl")]), Some("from-env".into()));
        assert_eq!(config.api_key.as_deref(), Some("from-kdl"));
    }

    #[test]
    fn environment_key_fills_in() {
        let config = Config::from_map(&map(&[("api_key", "  ")]), Some("from-env".into()));
        assert_eq!(config.api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_map(&map(&[("dark_mode", "maybe"), ("stale_responses", "whenever")]), None);
        assert!(!config.dark_mode);
        assert_eq!(config.stale_policy, StalePolicy::Apply);
    }

    #[test]
    fn initialize_wires_flags_and_client() {
        let config = Config::from_map(
            &map(&[("api_key", "k"), ("dark_mode", "true"), ("stale_responses", "latest")]),
            None,
        );
        let state = initialize(&config);
        assert!(state.dark_mode);
        assert_eq!(state.stale_policy, StalePolicy::Latest);
        assert!(state.client.is_some());
    }
}
