//! Search view state: query, debounce bookkeeping, and the suggestion list.
//!
//! Each keystroke bumps the input generation and schedules a debounce task
//! carrying it. When a task fires, only the one whose generation still matches
//! turns into a lookup, and it uses whatever the query is at that moment.
//! Intermediate query values are therefore dropped, never queued.

use super::modes::{SearchFocus, StalePolicy};
use crate::domain::error::Result;
use crate::domain::{SearchPage, SearchResultItem};
use std::time::Duration;

/// Quiet period after the last keystroke before a lookup is issued.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Queries shorter than this (in characters) are never looked up.
pub const MIN_QUERY_CHARS: usize = 3;

/// Upper bound on the suggestion list, whatever the service reports.
pub const MAX_SUGGESTIONS: usize = 10;

/// What a fired debounce task should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebounceOutcome {
    /// A later keystroke restarted the quiet period.
    Superseded,
    /// The settled query is too short; the suggestion list was cleared.
    TooShort,
    /// Issue a lookup for `query`, tagged with `seq`.
    Lookup { seq: u64, query: String },
}

/// One mounted instance of the search view.
#[derive(Debug, Clone)]
pub struct SearchView {
    /// Instance id; responses and tasks for other instances are ignored.
    pub id: u64,
    pub query: String,
    /// Current suggestions, replaced wholesale on every applied response.
    pub suggestions: Vec<SearchResultItem>,
    /// Match count the service reported for the current suggestions.
    pub total_results: Option<u32>,
    pub focus: SearchFocus,
    /// Highlighted suggestion, clamped to the list.
    pub selected_index: usize,
    generation: u64,
    last_issued_seq: u64,
}

impl SearchView {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self {
            id,
            query: String::new(),
            suggestions: Vec::new(),
            total_results: None,
            focus: SearchFocus::Typing,
            selected_index: 0,
            generation: 0,
            last_issued_seq: 0,
        }
    }

    /// Current input generation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Sequence number of the most recently issued lookup (0 if none yet).
    #[must_use]
    pub const fn last_issued_seq(&self) -> u64 {
        self.last_issued_seq
    }

    fn query_is_searchable(&self) -> bool {
        self.query.chars().count() >= MIN_QUERY_CHARS
    }

    /// Bookkeeping common to every query edit. Returns the new generation.
    fn edited(&mut self) -> u64 {
        self.generation += 1;
        if !self.query_is_searchable() {
            self.clear_suggestions();
        }
        self.generation
    }

    fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.total_results = None;
        self.selected_index = 0;
        self.focus = SearchFocus::Typing;
    }

    /// Appends a character. Returns the generation to debounce on.
    pub fn push_char(&mut self, c: char) -> u64 {
        self.query.push(c);
        self.edited()
    }

    /// Removes the last character. Returns `None` if the query was already empty.
    pub fn pop_char(&mut self) -> Option<u64> {
        self.query.pop()?;
        Some(self.edited())
    }

    /// Clears the query. Returns `None` if it was already empty.
    pub fn clear_query(&mut self) -> Option<u64> {
        if self.query.is_empty() {
            return None;
        }
        self.query.clear();
        Some(self.edited())
    }

    /// Resolves a fired debounce task.
    pub fn debounce_elapsed(&mut self, generation: u64) -> DebounceOutcome {
        if generation != self.generation {
            return DebounceOutcome::Superseded;
        }
        if !self.query_is_searchable() {
            self.clear_suggestions();
            return DebounceOutcome::TooShort;
        }

        self.last_issued_seq += 1;
        DebounceOutcome::Lookup {
            seq: self.last_issued_seq,
            query: self.query.clone(),
        }
    }

    /// Applies a lookup result to the suggestion list.
    ///
    /// Failures clear the list and are logged, never retried. Returns `true` if
    /// the view changed.
    pub fn apply_result(&mut self, seq: u64, result: Result<SearchPage>, policy: StalePolicy) -> bool {
        if policy == StalePolicy::Latest && seq != self.last_issued_seq {
            tracing::debug!(seq, latest = self.last_issued_seq, "discarding stale search response");
            return false;
        }
        if !self.query_is_searchable() {
            tracing::debug!(seq, "query shortened since lookup, dropping response");
            return false;
        }

        match result {
            Ok(page) => {
                let mut items = page.items;
                let reported = items.len();
                items.truncate(MAX_SUGGESTIONS);
                tracing::debug!(seq, reported, shown = items.len(), "suggestions replaced");

                self.suggestions = items;
                self.total_results = page.total_results;
                self.selected_index = 0;
                if self.suggestions.is_empty() {
                    self.focus = SearchFocus::Typing;
                }
            }
            Err(e) => {
                tracing::warn!(seq, error = %e, "suggestion lookup failed");
                self.clear_suggestions();
            }
        }
        true
    }

    /// Moves focus from the input to the suggestion list, if there is one.
    pub fn focus_suggestions(&mut self) -> bool {
        if self.suggestions.is_empty() || self.focus == SearchFocus::Navigating {
            return false;
        }
        self.focus = SearchFocus::Navigating;
        true
    }

    /// Returns focus to the input.
    pub fn focus_input(&mut self) -> bool {
        if self.focus == SearchFocus::Typing {
            return false;
        }
        self.focus = SearchFocus::Typing;
        true
    }

    /// Moves the highlight down by one, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.suggestions.len();
    }

    /// Moves the highlight up by one, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.suggestions.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&SearchResultItem> {
        self.suggestions.get(self.selected_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MovieSearchError, Poster};

    fn item(n: usize) -> SearchResultItem {
        SearchResultItem {
            id: format!("tt{n:07}"),
            title: format!("Batman {n}"),
            year: "1989".to_string(),
            poster: Poster::Placeholder,
        }
    }

    fn page(count: usize) -> SearchPage {
        SearchPage {
            items: (0..count).map(item).collect(),
            total_results: u32::try_from(count).ok(),
        }
    }

    fn typed(query: &str) -> (SearchView, u64) {
        let mut view = SearchView::new(1);
        let mut generation = 0;
        for c in query.chars() {
            generation = view.push_char(c);
        }
        (view, generation)
    }

    #[test]
    fn short_query_never_looks_up() {
        for query in ["", "b", "ba"] {
            let (mut view, generation) = typed(query);
            assert_eq!(view.debounce_elapsed(generation), DebounceOutcome::TooShort);
            assert!(view.suggestions.is_empty());
        }
    }

    #[test]
    fn short_query_counts_characters_not_bytes() {
        let (mut view, generation) = typed("éé");
        assert_eq!(view.debounce_elapsed(generation), DebounceOutcome::TooShort);
        let generation = view.push_char('é');
        assert!(matches!(view.debounce_elapsed(generation), DebounceOutcome::Lookup { .. }));
    }

    #[test]
    fn only_latest_generation_looks_up() {
        let (mut view, _) = typed("bat");
        let first = view.generation();
        for c in "man".chars() {
            view.push_char(c);
        }
        assert_eq!(view.debounce_elapsed(first), DebounceOutcome::Superseded);
        assert_eq!(
            view.debounce_elapsed(view.generation()),
            DebounceOutcome::Lookup { seq: 1, query: "batman".to_string() }
        );
    }

    #[test]
    fn suggestions_are_capped() {
        let (mut view, generation) = typed("batman");
        view.debounce_elapsed(generation);
        assert!(view.apply_result(1, Ok(page(25)), StalePolicy::Apply));
        assert_eq!(view.suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(view.total_results, Some(25));
    }

    #[test]
    fn empty_page_clears_list() {
        let (mut view, generation) = typed("batman");
        view.debounce_elapsed(generation);
        view.apply_result(1, Ok(page(3)), StalePolicy::Apply);
        view.apply_result(1, Ok(SearchPage::empty()), StalePolicy::Apply);
        assert!(view.suggestions.is_empty());
    }

    #[test]
    fn failure_clears_list() {
        let (mut view, generation) = typed("batman");
        view.debounce_elapsed(generation);
        view.apply_result(1, Ok(page(3)), StalePolicy::Apply);
        let failure = Err(MovieSearchError::Http { status: 503, message: String::new() });
        assert!(view.apply_result(1, failure, StalePolicy::Apply));
        assert!(view.suggestions.is_empty());
    }

    #[test]
    fn arrival_order_lets_stale_response_win() {
        let (mut view, generation) = typed("bat");
        view.debounce_elapsed(generation);
        let generation = view.push_char('s');
        view.debounce_elapsed(generation);

        view.apply_result(2, Ok(page(2)), StalePolicy::Apply);
        view.apply_result(1, Ok(page(7)), StalePolicy::Apply);
        assert_eq!(view.suggestions.len(), 7);
    }

    #[test]
    fn latest_policy_discards_stale_response() {
        let (mut view, generation) = typed("bat");
        view.debounce_elapsed(generation);
        let generation = view.push_char('s');
        view.debounce_elapsed(generation);

        view.apply_result(2, Ok(page(2)), StalePolicy::Latest);
        assert!(!view.apply_result(1, Ok(page(7)), StalePolicy::Latest));
        assert_eq!(view.suggestions.len(), 2);
    }

    #[test]
    fn shortening_query_clears_immediately() {
        let (mut view, generation) = typed("bat");
        view.debounce_elapsed(generation);
        view.apply_result(1, Ok(page(4)), StalePolicy::Apply);

        view.pop_char();
        assert!(view.suggestions.is_empty());
        assert!(!view.apply_result(1, Ok(page(4)), StalePolicy::Apply));
        assert!(view.suggestions.is_empty());
    }

    #[test]
    fn selection_wraps() {
        let (mut view, generation) = typed("batman");
        view.debounce_elapsed(generation);
        view.apply_result(1, Ok(page(3)), StalePolicy::Apply);

        view.move_selection_up();
        assert_eq!(view.selected_index, 2);
        view.move_selection_down();
        assert_eq!(view.selected_index, 0);
        assert_eq!(view.selected_item().map(|i| i.id.as_str()), Some("tt0000000"));
    }

    #[test]
    fn focus_suggestions_requires_results() {
        let mut view = SearchView::new(1);
        assert!(!view.focus_suggestions());
        assert_eq!(view.focus, SearchFocus::Typing);
    }

    #[test]
    fn clearing_empty_query_is_noop() {
        let mut view = SearchView::new(1);
        assert_eq!(view.clear_query(), None);
        assert_eq!(view.pop_char(), None);
        assert_eq!(view.generation(), 0);
    }
}
