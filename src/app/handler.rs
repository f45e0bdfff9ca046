//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point from the plugin shim. It takes
//! the current time as a [`Duration`] since plugin load so debounce and
//! transition deadlines can be driven by a manual clock under test.
//!
//! # Event Types
//!
//! - **Input**: `Char`, `Backspace`, `Escape`
//! - **Navigation**: `MoveDown`, `MoveUp`, `FocusSuggestions`, `FocusInput`, `Select`, `Back`
//! - **Shell**: `ToggleTheme`, `Navigate`, `CloseFocus`
//! - **System**: `Tick` (host timer fired), `LookupCompleted` (web response)
//!
//! # Example
//!
//! ```rust
//! use moviesearch::app::{handle_event, AppState, Event};
//! use moviesearch::ui::ThemeSet;
//! use std::time::Duration;
//!
//! let mut state = AppState::new(None, ThemeSet::default(), false);
//! let (render, actions) = handle_event(&mut state, &Event::Char('m'), Duration::ZERO)?;
//! assert!(render);
//! assert_eq!(actions.len(), 1); // debounce wakeup
//! # Ok::<(), moviesearch::MovieSearchError>(())
//! ```

use super::details::{EXIT_DELAY, REVEAL_DELAY};
use super::scheduler::Task;
use super::search::{DebounceOutcome, DEBOUNCE};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Route;
use crate::omdb::{decode_details, decode_search, LookupKind, RequestContext, TraceContext};
use std::time::Duration;

/// Events triggered by user input, host timers, or web responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Leaves the suggestion list, clears the query, or closes the pane,
    /// whichever applies first. On the details screen this is `Back`.
    Escape,
    /// Moves the suggestion highlight down (wraps).
    MoveDown,
    /// Moves the suggestion highlight up (wraps).
    MoveUp,
    /// Moves focus from the search box into the suggestion list.
    FocusSuggestions,
    /// Returns focus to the search box.
    FocusInput,
    /// Opens the details of the highlighted suggestion.
    Select,
    /// Starts the exit transition of the details view.
    Back,
    /// Flips between the light and dark theme.
    ToggleTheme,
    /// Hides the plugin pane.
    CloseFocus,
    /// Requests a route change by path, e.g. `/movie/tt0133093`.
    Navigate(String),
    /// A host timer fired; runs every scheduled task that is due.
    Tick,
    /// A lookup finished.
    ///
    /// `status` is the HTTP status; transport failures arrive with a non-2xx
    /// status and whatever body the host produced.
    LookupCompleted {
        context: RequestContext,
        status: u16,
        body: Vec<u8>,
    },
}

impl Event {
    fn name(&self) -> &'static str {
        match self {
            Self::Char(_) => "Char",
            Self::Backspace => "Backspace",
            Self::Escape => "Escape",
            Self::MoveDown => "MoveDown",
            Self::MoveUp => "MoveUp",
            Self::FocusSuggestions => "FocusSuggestions",
            Self::FocusInput => "FocusInput",
            Self::Select => "Select",
            Self::Back => "Back",
            Self::ToggleTheme => "ToggleTheme",
            Self::CloseFocus => "CloseFocus",
            Self::Navigate(_) => "Navigate",
            Self::Tick => "Tick",
            Self::LookupCompleted { .. } => "LookupCompleted",
        }
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the UI should re-render, and the actions for the host to
/// carry out in order.
///
/// # Errors
///
/// Currently every failure is absorbed into state (logged, list cleared, view
/// left loading); the `Result` is kept for the shim's uniform error path.
pub fn handle_event(state: &mut AppState, event: &Event, now: Duration) -> Result<(bool, Vec<Action>)> {
    let _parent = match event {
        Event::LookupCompleted { context, .. } => context.trace.as_ref().and_then(TraceContext::attach),
        _ => None,
    };
    let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

    match event {
        Event::Char(c) => Ok(handle_char(state, *c, now)),
        Event::Backspace => {
            let Some(view) = state.search_view_mut() else {
                return Ok((false, vec![]));
            };
            view.focus_input();
            let Some(generation) = view.pop_char() else {
                return Ok((true, vec![]));
            };
            let view_id = view.id;
            Ok((true, vec![schedule_debounce(state, view_id, generation, now)]))
        }
        Event::Escape => {
            if state.details_view().is_some() {
                return Ok(handle_back(state, now));
            }
            let Some(view) = state.search_view_mut() else {
                return Ok((false, vec![]));
            };
            if view.focus_input() {
                return Ok((true, vec![]));
            }
            match view.clear_query() {
                Some(generation) => {
                    let view_id = view.id;
                    Ok((true, vec![schedule_debounce(state, view_id, generation, now)]))
                }
                None => Ok((false, vec![Action::CloseFocus])),
            }
        }
        Event::MoveDown => Ok(with_search(state, |view| {
            view.move_selection_down();
            !view.suggestions.is_empty()
        })),
        Event::MoveUp => Ok(with_search(state, |view| {
            view.move_selection_up();
            !view.suggestions.is_empty()
        })),
        Event::FocusSuggestions => Ok(with_search(state, super::search::SearchView::focus_suggestions)),
        Event::FocusInput => Ok(with_search(state, super::search::SearchView::focus_input)),
        Event::Select => Ok(handle_select(state)),
        Event::Back => Ok(handle_back(state, now)),
        Event::ToggleTheme => {
            state.toggle_theme();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Navigate(path) => {
            let route = Route::parse(path).unwrap_or_else(|e| {
                tracing::warn!(path = %path, error = %e, "unrecognised route, showing search");
                Route::Search
            });
            Ok((true, state.navigate(route)))
        }
        Event::Tick => Ok(handle_tick(state, now)),
        Event::LookupCompleted { context, status, body } => Ok(handle_lookup_completed(state, context, *status, body, now)),
    }
}

fn with_search(state: &mut AppState, f: impl FnOnce(&mut super::search::SearchView) -> bool) -> (bool, Vec<Action>) {
    (state.search_view_mut().is_some_and(f), vec![])
}

fn schedule_debounce(state: &mut AppState, view: u64, generation: u64, now: Duration) -> Action {
    Action::ScheduleWakeup(state.scheduler.schedule(now, DEBOUNCE, Task::Debounce { view, generation }))
}

fn handle_char(state: &mut AppState, c: char, now: Duration) -> (bool, Vec<Action>) {
    let Some(view) = state.search_view_mut() else {
        return (false, vec![]);
    };
    view.focus_input();
    let generation = view.push_char(c);
    let view_id = view.id;
    (true, vec![schedule_debounce(state, view_id, generation, now)])
}

fn handle_select(state: &mut AppState) -> (bool, Vec<Action>) {
    let Some(item) = state.search_view().and_then(super::search::SearchView::selected_item) else {
        tracing::debug!("nothing selected");
        return (false, vec![]);
    };

    match Route::details(item.id.clone()) {
        Ok(route) => {
            tracing::debug!(movie_id = %item.id, title = %item.title, "suggestion selected");
            (true, state.navigate(route))
        }
        Err(e) => {
            tracing::warn!(movie_id = %item.id, error = %e, "suggestion has unusable identifier");
            (false, vec![])
        }
    }
}

fn handle_back(state: &mut AppState, now: Duration) -> (bool, Vec<Action>) {
    let Some(view) = state.details_view_mut() else {
        return (false, vec![]);
    };
    if !view.begin_exit() {
        return (false, vec![]);
    }
    let task = Task::FinishExit { view: view.id };
    tracing::debug!(movie_id = %view.movie_id, "leaving details");
    (true, vec![Action::ScheduleWakeup(state.scheduler.schedule(now, EXIT_DELAY, task))])
}

fn handle_tick(state: &mut AppState, now: Duration) -> (bool, Vec<Action>) {
    let (due, rearm) = state.scheduler.take_due(now);
    let mut should_render = false;
    let mut actions = Vec::new();

    for task in due {
        let (render, mut task_actions) = run_task(state, task);
        should_render |= render;
        actions.append(&mut task_actions);
    }
    if let Some(delay) = rearm {
        actions.push(Action::ScheduleWakeup(delay));
    }
    (should_render, actions)
}

fn run_task(state: &mut AppState, task: Task) -> (bool, Vec<Action>) {
    match task {
        Task::Debounce { view, generation } => {
            let Some(search) = state.search_view_mut().filter(|v| v.id == view) else {
                return (false, vec![]);
            };
            match search.debounce_elapsed(generation) {
                DebounceOutcome::Superseded => (false, vec![]),
                DebounceOutcome::TooShort => (true, vec![]),
                DebounceOutcome::Lookup { seq, query } => {
                    let Some(client) = &state.client else {
                        tracing::debug!(query = %query, "no API key configured, search skipped");
                        return (false, vec![]);
                    };
                    tracing::debug!(query = %query, seq, "issuing search lookup");
                    (false, vec![Action::Lookup(client.search(view, seq, &query))])
                }
            }
        }
        Task::Reveal { view } => {
            let render = state
                .details_view_mut()
                .filter(|v| v.id == view)
                .is_some_and(super::details::DetailsView::reveal);
            (render, vec![])
        }
        Task::FinishExit { view } => {
            if state.details_view().is_some_and(|v| v.id == view) {
                (true, state.navigate(Route::Search))
            } else {
                (false, vec![])
            }
        }
    }
}

fn handle_lookup_completed(
    state: &mut AppState,
    context: &RequestContext,
    status: u16,
    body: &[u8],
    now: Duration,
) -> (bool, Vec<Action>) {
    match &context.kind {
        LookupKind::Search { query } => {
            let policy = state.stale_policy;
            let Some(view) = state.search_view_mut().filter(|v| v.id == context.view) else {
                tracing::debug!(query = %query, view = context.view, "search response for unmounted view");
                return (false, vec![]);
            };
            let render = view.apply_result(context.seq, decode_search(status, body), policy);
            (render, vec![])
        }
        LookupKind::Details { id } => {
            let Some(view) = state.details_view_mut().filter(|v| v.id == context.view) else {
                tracing::debug!(movie_id = %id, view = context.view, "details response for unmounted view");
                return (false, vec![]);
            };
            if !view.apply_result(decode_details(status, body)) {
                return (false, vec![]);
            }
            let task = Task::Reveal { view: view.id };
            let wakeup = state.scheduler.schedule(now, REVEAL_DELAY, task);
            (true, vec![Action::ScheduleWakeup(wakeup)])
        }
    }
}
