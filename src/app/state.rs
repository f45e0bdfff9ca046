//! Application state management and view model computation.
//!
//! [`AppState`] is the shell: it owns the theme flag, the mounted view for the
//! current route, and the task scheduler. Views never see each other; the only
//! thing handed to both is the theme, chosen at render time from the flag.
//!
//! # State Components
//!
//! - **Screen**: the mounted search or details view for the current route
//! - **Theme flag**: `dark_mode`, flipped only by the user
//! - **Scheduler**: debounce and transition deadlines
//! - **Client**: URL builder for the lookup service; `None` without an API key
//!
//! # Example
//!
//! ```rust
//! use moviesearch::app::AppState;
//! use moviesearch::domain::Route;
//! use moviesearch::ui::ThemeSet;
//!
//! let state = AppState::new(None, ThemeSet::default(), false);
//! assert_eq!(state.route(), Route::Search);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.header.title, "MovieSearch");
//! ```

use super::details::DetailsView;
use super::modes::{Presence, SearchFocus, StalePolicy};
use super::scheduler::Scheduler;
use super::search::SearchView;
use crate::domain::{Route, SearchResultItem};
use crate::omdb::OmdbClient;
use crate::ui::components::CONTENT_MARGIN;
use crate::ui::theme::{Theme, ThemeSet};
use crate::ui::viewmodel::{
    Body, DetailsContent, DetailsScreen, DisplayItem, EmptyState, FooterInfo, HeaderInfo,
    SearchBarInfo, SearchScreen, UIViewModel,
};
use crate::Action;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Rows taken by everything on the search screen except the suggestion rows:
/// blank, header, border, heading, blank, search box (3), shadow, summary,
/// border, footer (2).
const SEARCH_CHROME_ROWS: usize = 13;

/// Width reserved for the year and poster columns of a suggestion row.
const SUGGESTION_META_WIDTH: usize = 16;

const FOOTER_NOTICE: &str = "© 2025 MovieSearch. All rights reserved.";

/// The view mounted for the current route.
#[derive(Debug, Clone)]
pub enum Screen {
    Search(SearchView),
    Details(DetailsView),
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,

    /// Theme preference. Written only by the toggle event.
    pub dark_mode: bool,

    /// Light and dark palettes; `dark_mode` picks one per render.
    pub themes: ThemeSet,

    pub scheduler: Scheduler,

    /// Lookup URL builder. Without an API key no lookups are issued.
    pub client: Option<OmdbClient>,

    pub stale_policy: StalePolicy,

    next_view_id: u64,
}

impl AppState {
    /// Creates the shell with a fresh search view mounted at `/`.
    #[must_use]
    pub fn new(client: Option<OmdbClient>, themes: ThemeSet, dark_mode: bool) -> Self {
        Self {
            screen: Screen::Search(SearchView::new(1)),
            dark_mode,
            themes,
            scheduler: Scheduler::new(),
            client,
            stale_policy: StalePolicy::default(),
            next_view_id: 2,
        }
    }

    #[must_use]
    pub const fn with_stale_policy(mut self, policy: StalePolicy) -> Self {
        self.stale_policy = policy;
        self
    }

    /// Route of the mounted view.
    #[must_use]
    pub fn route(&self) -> Route {
        match &self.screen {
            Screen::Search(_) => Route::Search,
            Screen::Details(view) => Route::Details {
                id: view.movie_id.clone(),
            },
        }
    }

    /// Palette for the current theme flag.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        self.themes.pick(self.dark_mode)
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        tracing::debug!(dark_mode = self.dark_mode, "theme toggled");
    }

    #[must_use]
    pub const fn search_view(&self) -> Option<&SearchView> {
        match &self.screen {
            Screen::Search(view) => Some(view),
            Screen::Details(_) => None,
        }
    }

    pub fn search_view_mut(&mut self) -> Option<&mut SearchView> {
        match &mut self.screen {
            Screen::Search(view) => Some(view),
            Screen::Details(_) => None,
        }
    }

    #[must_use]
    pub const fn details_view(&self) -> Option<&DetailsView> {
        match &self.screen {
            Screen::Details(view) => Some(view),
            Screen::Search(_) => None,
        }
    }

    pub fn details_view_mut(&mut self) -> Option<&mut DetailsView> {
        match &mut self.screen {
            Screen::Details(view) => Some(view),
            Screen::Search(_) => None,
        }
    }

    fn allocate_view_id(&mut self) -> u64 {
        let id = self.next_view_id;
        self.next_view_id += 1;
        id
    }

    /// Mounts a fresh view for `route`.
    ///
    /// The previous view is dropped along with its state; its pending tasks and
    /// in-flight lookups become no-ops. A details route issues its one lookup
    /// here.
    pub fn navigate(&mut self, route: Route) -> Vec<Action> {
        let view_id = self.allocate_view_id();
        tracing::debug!(from = %self.route(), to = %route, view_id, "navigating");

        match route {
            Route::Search => {
                self.screen = Screen::Search(SearchView::new(view_id));
                vec![]
            }
            Route::Details { id } => {
                let actions = self.client.as_ref().map_or_else(
                    || {
                        tracing::error!(movie_id = %id, "no API key configured, details lookup skipped");
                        vec![]
                    },
                    |client| vec![Action::Lookup(client.details(view_id, &id))],
                );
                self.screen = Screen::Details(DetailsView::new(view_id, id));
                actions
            }
        }
    }

    /// Computes a renderable view model for the given terminal size.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = match &self.screen {
            Screen::Search(_) if self.client.is_none() => Body::Empty(EmptyState {
                message: "No API key configured".to_string(),
                subtitle: "Set api_key in the plugin configuration or export OMDB_API_KEY".to_string(),
            }),
            Screen::Search(view) => Body::Search(Self::compute_search_screen(view, rows, cols)),
            Screen::Details(view) => Body::Details(Self::compute_details_screen(view)),
        };

        UIViewModel {
            header: self.compute_header(),
            body,
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let theme_label = if self.dark_mode {
            "☀ light"
        } else {
            "☾ dark"
        };
        HeaderInfo {
            title: "MovieSearch".to_string(),
            theme_label: theme_label.to_string(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match &self.screen {
            Screen::Search(view) if view.focus == SearchFocus::Navigating => {
                "j/k: navigate  Enter: open  /: edit query  Ctrl+t: theme"
            }
            Screen::Search(_) => "Type to search  Down: suggestions  Enter: open  Ctrl+t: theme  Esc: clear",
            Screen::Details(_) => "Esc/b: back  Ctrl+t: theme  q: close",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
            notice: FOOTER_NOTICE.to_string(),
        }
    }

    /// Builds the search screen, windowing the suggestions around the selection.
    fn compute_search_screen(view: &SearchView, rows: usize, cols: usize) -> SearchScreen {
        let available_rows = rows.saturating_sub(SEARCH_CHROME_ROWS).max(1);
        let count = view.suggestions.len();

        let mut visible_start = view.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(count);
        if visible_end - visible_start < available_rows && count >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let matcher = (!view.query.is_empty()).then(SkimMatcherV2::default);
        let title_width = cols.saturating_sub(CONTENT_MARGIN * 2 + SUGGESTION_META_WIDTH);
        let navigating = view.focus == SearchFocus::Navigating;

        let items = view.suggestions[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, item)| {
                let is_selected = navigating && visible_start + relative_idx == view.selected_index;
                Self::compute_display_item(item, &view.query, is_selected, title_width, matcher.as_ref())
            })
            .collect();

        let summary = match view.total_results {
            Some(total) if usize::try_from(total).map_or(true, |t| t > count) => {
                Some(format!("Showing {count} of {total} matches"))
            }
            _ => None,
        };

        SearchScreen {
            heading: "Find Your Favorite Movies".to_string(),
            search_bar: SearchBarInfo {
                query: view.query.clone(),
                focused: view.focus == SearchFocus::Typing,
                placeholder: "Search for movies...".to_string(),
            },
            items,
            selected_index: navigating.then(|| view.selected_index.saturating_sub(visible_start)),
            scrolled: visible_start > 0,
            summary,
        }
    }

    fn compute_display_item(
        item: &SearchResultItem,
        query: &str,
        is_selected: bool,
        title_width: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> DisplayItem {
        let title = truncate_chars(&item.title, title_width);
        let highlight_ranges = matcher.map_or_else(Vec::new, |m| compute_highlight_ranges(&title, query, m));

        DisplayItem {
            title,
            year: item.year.clone(),
            poster: item.poster.source().to_string(),
            has_poster: !item.poster.is_placeholder(),
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_details_screen(view: &DetailsView) -> DetailsScreen {
        let Some(record) = &view.record else {
            return DetailsScreen::Loading {
                movie_id: view.movie_id.clone(),
                exiting: view.presence == Presence::Exiting,
            };
        };

        DetailsScreen::Loaded(DetailsContent {
            title: record.title.clone(),
            facts: vec![
                ("Year".to_string(), record.year.clone()),
                ("Rating".to_string(), record.rating_label()),
                ("Runtime".to_string(), record.runtime.clone()),
                ("Language".to_string(), record.language.clone()),
                ("Rated".to_string(), record.rated.clone()),
                ("Genre".to_string(), record.genre.clone()),
                ("Director".to_string(), record.director.clone()),
            ],
            sections: vec![
                ("Plot".to_string(), record.plot.clone()),
                ("Cast".to_string(), record.cast.clone()),
                ("Awards".to_string(), record.awards.clone()),
            ],
            poster: record.poster.source().to_string(),
            has_poster: !record.poster.is_placeholder(),
            dimmed: !view.is_shown(),
        })
    }
}

/// Shortens `text` to at most `width` characters, marking the cut with `...`.
fn truncate_chars(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Character ranges of `text` matched by `query`, with consecutive indices coalesced.
fn compute_highlight_ranges(text: &str, query: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    use fuzzy_matcher::FuzzyMatcher;

    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::search::MAX_SUGGESTIONS;
    use crate::domain::{Poster, SearchPage};

    fn client() -> OmdbClient {
        OmdbClient::new("key", "https://example.test").expect("valid client")
    }

    fn state_with_suggestions(count: usize) -> AppState {
        let mut state = AppState::new(Some(client()), ThemeSet::default(), false);
        let view = state.search_view_mut().expect("search mounted");
        let mut generation = 0;
        for c in "matrix".chars() {
            generation = view.push_char(c);
        }
        view.debounce_elapsed(generation);
        let page = SearchPage {
            items: (0..count)
                .map(|n| SearchResultItem {
                    id: format!("tt{n:07}"),
                    title: format!("The Matrix {n}"),
                    year: "1999".into(),
                    poster: if n % 2 == 0 {
                        Poster::Placeholder
                    } else {
                        Poster::Url(format!("https://img.test/{n}.jpg"))
                    },
                })
                .collect(),
            total_results: u32::try_from(count).ok(),
        };
        view.apply_result(1, Ok(page), StalePolicy::Apply);
        state
    }

    #[test]
    fn navigate_to_details_issues_one_lookup() {
        let mut state = AppState::new(Some(client()), ThemeSet::default(), false);
        let actions = state.navigate(Route::Details { id: "tt0133093".into() });
        assert_eq!(actions.len(), 1);
        assert!(matches!(&actions[0], Action::Lookup(req) if req.url.contains("i=tt0133093")));
        assert_eq!(state.route().path(), "/movie/tt0133093");
    }

    #[test]
    fn navigate_without_client_issues_nothing() {
        let mut state = AppState::new(None, ThemeSet::default(), false);
        let actions = state.navigate(Route::Details { id: "tt0133093".into() });
        assert!(actions.is_empty());
        assert!(state.details_view().is_some_and(DetailsView::is_loading));
    }

    #[test]
    fn each_mount_gets_a_new_view_id() {
        let mut state = AppState::new(Some(client()), ThemeSet::default(), false);
        let first = state.search_view().map(|v| v.id);
        state.navigate(Route::Search);
        assert_ne!(state.search_view().map(|v| v.id), first);
    }

    #[test]
    fn missing_client_renders_empty_state() {
        let state = AppState::new(None, ThemeSet::default(), false);
        assert!(matches!(state.compute_viewmodel(24, 80).body, Body::Empty(_)));
    }

    #[test]
    fn placeholder_posters_reach_the_view_model() {
        let state = state_with_suggestions(4);
        let Body::Search(screen) = state.compute_viewmodel(40, 100).body else {
            panic!("expected search screen");
        };
        assert_eq!(screen.items.len(), 4);
        assert_eq!(screen.items[0].poster, crate::domain::PLACEHOLDER_POSTER);
        assert!(!screen.items[0].has_poster);
        assert_eq!(screen.items[1].poster, "https://img.test/1.jpg");
    }

    #[test]
    fn suggestion_window_follows_selection() {
        let mut state = state_with_suggestions(MAX_SUGGESTIONS);
        if let Some(view) = state.search_view_mut() {
            view.focus_suggestions();
            for _ in 0..9 {
                view.move_selection_down();
            }
        }
        let Body::Search(screen) = state.compute_viewmodel(18, 100).body else {
            panic!("expected search screen");
        };
        assert_eq!(screen.items.len(), 5);
        assert!(screen.scrolled);
        assert_eq!(screen.selected_index, Some(4));
        assert_eq!(screen.items[4].title, "The Matrix 9");
    }

    #[test]
    fn query_matches_are_highlighted() {
        let state = state_with_suggestions(1);
        let Body::Search(screen) = state.compute_viewmodel(40, 100).body else {
            panic!("expected search screen");
        };
        assert_eq!(screen.items[0].highlight_ranges, vec![(4, 10)]);
    }

    #[test]
    fn truncation_is_char_safe() {
        assert_eq!(truncate_chars("Amélie Poulain", 8), "Améli...");
        assert_eq!(truncate_chars("Up", 8), "Up");
    }

    #[test]
    fn header_label_follows_theme_flag() {
        let mut state = AppState::new(None, ThemeSet::default(), false);
        assert_eq!(state.compute_viewmodel(24, 80).header.theme_label, "☾ dark");
        state.toggle_theme();
        assert_eq!(state.compute_viewmodel(24, 80).header.theme_label, "☀ light");
        assert_eq!(state.theme().name, "dark");
    }
}
