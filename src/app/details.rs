//! Details view state.
//!
//! A details view is mounted for one identifier and issues one lookup for it.
//! Until a record arrives it shows a loading placeholder; a failed lookup leaves
//! it there. Leaving the view goes through [`Presence::Exiting`] so the fade-out
//! can play before the route changes.

use super::modes::Presence;
use crate::domain::error::Result;
use crate::domain::MovieRecord;
use std::time::Duration;

/// Delay between a record arriving and the content being shown at full intensity.
pub const REVEAL_DELAY: Duration = Duration::from_millis(100);

/// Length of the exit transition; the route changes when it elapses.
pub const EXIT_DELAY: Duration = Duration::from_millis(300);

/// One mounted instance of the details view.
#[derive(Debug, Clone)]
pub struct DetailsView {
    pub id: u64,
    /// Identifier from the route.
    pub movie_id: String,
    /// Last received record; `None` while loading.
    pub record: Option<MovieRecord>,
    /// Entrance transition finished.
    pub revealed: bool,
    pub presence: Presence,
}

impl DetailsView {
    #[must_use]
    pub fn new(id: u64, movie_id: impl Into<String>) -> Self {
        Self {
            id,
            movie_id: movie_id.into(),
            record: None,
            revealed: false,
            presence: Presence::Visible,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.record.is_none()
    }

    /// Applies a lookup result.
    ///
    /// A record replaces whatever was shown and restarts the entrance
    /// transition. A failure is logged and the view keeps its current state.
    /// Returns `true` if a record was applied.
    pub fn apply_result(&mut self, result: Result<MovieRecord>) -> bool {
        match result {
            Ok(record) => {
                tracing::debug!(movie_id = %self.movie_id, title = %record.title, "movie record loaded");
                self.record = Some(record);
                self.revealed = false;
                true
            }
            Err(e) => {
                tracing::warn!(movie_id = %self.movie_id, error = %e, "movie lookup failed");
                false
            }
        }
    }

    /// Finishes the entrance transition. Returns `true` if anything changed.
    pub fn reveal(&mut self) -> bool {
        if self.revealed || self.record.is_none() || self.presence == Presence::Exiting {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Starts the exit transition. Returns `false` if it was already running.
    pub fn begin_exit(&mut self) -> bool {
        if self.presence == Presence::Exiting {
            return false;
        }
        self.presence = Presence::Exiting;
        true
    }

    /// Content is drawn at full intensity only once revealed and while not exiting.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.revealed && self.presence == Presence::Visible
    }
}
