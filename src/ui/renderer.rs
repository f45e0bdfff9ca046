//! Top-level rendering coordinator.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → Canvas → stdout
//! ```
//!
//! The theme is chosen from the application flag here, once per frame, and
//! handed to every component read-only.
//!
//! # Example
//!
//! ```rust
//! use moviesearch::app::AppState;
//! use moviesearch::ui::{render_to_string, ThemeSet};
//!
//! let state = AppState::new(None, ThemeSet::default(), true);
//! let frame = render_to_string(&state, 24, 80);
//! assert!(frame.contains("MovieSearch"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Canvas;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_to_string(state, rows, cols));
}

/// Renders one frame as an ANSI string.
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let mut canvas = Canvas::new(state.theme());
    components::render_frame(&mut canvas, &viewmodel, rows, cols);
    canvas.into_string()
}
