//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the domain, lookup, and UI
//! layers. All transitions are driven by [`handle_event`]; side effects leave as
//! [`Action`]s.
//!
//! # Architecture
//!
//! ```text
//! Keys / Timer / WebRequestResult → Events → handle_event → State → Actions
//!                                     ↑                              ↓
//!                                     └──── web_request / set_timeout ┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`details`]: Details view state and transitions
//! - [`handler`]: Event processing and task dispatch
//! - [`modes`]: Focus, presence, and stale-response policy enums
//! - [`scheduler`]: Deadline queue behind debounce and transitions
//! - [`search`]: Search view state, debounce, and suggestions
//! - [`state`]: Application shell and view model computation

pub mod actions;
pub mod details;
pub mod handler;
pub mod modes;
pub mod scheduler;
pub mod search;
pub mod state;

pub use actions::Action;
pub use details::DetailsView;
pub use handler::{handle_event, Event};
pub use modes::{Presence, SearchFocus, StalePolicy};
pub use scheduler::{Scheduler, Task};
pub use search::SearchView;
pub use state::{AppState, Screen};
