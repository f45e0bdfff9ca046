//! View model types representing renderable UI state.
//!
//! Computed by `AppState::compute_viewmodel()` and consumed by the renderer.
//! They carry display-ready data only: truncated titles, highlight ranges,
//! resolved poster sources, and whether content is drawn dimmed.

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub body: Body,
    pub footer: FooterInfo,
}

/// Screen-specific content between header and footer.
#[derive(Debug, Clone)]
pub enum Body {
    Search(SearchScreen),
    Details(DetailsScreen),
    /// Nothing can be shown yet, e.g. no API key configured.
    Empty(EmptyState),
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    /// Theme toggle indicator, naming the theme the toggle switches to.
    pub theme_label: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help for the current screen and focus.
    pub keybindings: String,
    pub notice: String,
}

/// Search screen: heading, input box, and suggestion list.
#[derive(Debug, Clone)]
pub struct SearchScreen {
    pub heading: String,
    pub search_bar: SearchBarInfo,
    /// Visible window of the suggestion list.
    pub items: Vec<DisplayItem>,
    /// Highlighted row within `items`, when the list has focus.
    pub selected_index: Option<usize>,
    /// The window starts below the first suggestion.
    pub scrolled: bool,
    /// E.g. "Showing 10 of 25 matches" when the service found more than shown.
    pub summary: Option<String>,
}

/// Search input box.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
    /// Draw the focus ring.
    pub focused: bool,
    pub placeholder: String,
}

/// One suggestion row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub title: String,
    pub year: String,
    /// Poster URL, or the placeholder image name.
    pub poster: String,
    pub has_poster: bool,
    pub is_selected: bool,
    /// Character ranges of `title` matching the query, `(start, end)` exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Details screen content.
#[derive(Debug, Clone)]
pub enum DetailsScreen {
    /// No record yet, or the lookup failed.
    Loading { movie_id: String, exiting: bool },
    Loaded(DetailsContent),
}

/// A loaded movie record, laid out for display.
#[derive(Debug, Clone)]
pub struct DetailsContent {
    pub title: String,
    /// Short label/value pairs shown in a grid.
    pub facts: Vec<(String, String)>,
    /// Titled paragraphs: plot, cast, awards.
    pub sections: Vec<(String, String)>,
    pub poster: String,
    pub has_poster: bool,
    /// Entrance transition pending, or exit transition running.
    pub dimmed: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}
