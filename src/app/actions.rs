//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler stays pure: it mutates [`AppState`](super::AppState) and
//! returns a `Vec<Action>` describing what the host must do. The plugin shim
//! maps each action onto a Zellij API call.
//!
//! # Example
//!
//! ```rust
//! use moviesearch::Action;
//! use std::time::Duration;
//!
//! let actions = vec![Action::ScheduleWakeup(Duration::from_millis(300))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::omdb::LookupRequest;
use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Arms a host timer; its `Timer` event drives due scheduled tasks.
    ScheduleWakeup(Duration),

    /// Issues a GET request against the lookup service.
    ///
    /// The response comes back later as a lookup-completed event carrying the
    /// same request context.
    Lookup(LookupRequest),
}
