//! Small state enums shared by the views.
//!
//! - [`SearchFocus`]: whether keystrokes edit the query or move through suggestions
//! - [`Presence`]: the details view's exit transition gate
//! - [`StalePolicy`]: what to do with a search response that is no longer the latest

/// Focus state within the search view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFocus {
    /// Keystrokes edit the query.
    ///
    /// Accepts characters and backspace; Down moves focus into the suggestions.
    #[default]
    Typing,

    /// Keystrokes move through the suggestion list.
    ///
    /// Accepts j/k for movement, enter to select, and / or Esc to return to Typing.
    Navigating,
}

/// Exit transition gate of a details view.
///
/// Strictly one-way: a view that starts exiting never becomes visible again;
/// the route change happens when the scheduled exit task fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    #[default]
    Visible,
    /// Fading out; navigation is pending.
    Exiting,
}

/// Ordering policy for search responses that arrive out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Apply responses in arrival order, even if a newer lookup was issued.
    #[default]
    Apply,
    /// Drop any response whose sequence number is not the latest issued.
    Latest,
}

impl StalePolicy {
    /// Parses a configuration value. Unknown values yield `None`.
    ///
    /// ```
    /// use moviesearch::app::StalePolicy;
    ///
    /// assert_eq!(StalePolicy::parse("latest"), Some(StalePolicy::Latest));
    /// assert_eq!(StalePolicy::parse("bogus"), None);
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "apply" | "arrival" => Some(Self::Apply),
            "latest" | "discard" => Some(Self::Latest),
            _ => None,
        }
    }
}
