//! Composable UI component renderers.
//!
//! # Components
//!
//! - `header`: Title bar with the theme indicator
//! - `footer`: Keybinding hints and notice
//! - `search`: Search input box with focus ring
//! - `suggestions`: Suggestion rows and scroll shadow
//! - `details`: Movie record or loading placeholder
//! - `empty`: Centered message for nothing-to-show states
//!
//! # Layout
//!
//! ```text
//! [blank]
//! [Header]
//! [Border]
//! [Body: search, details, or empty state]
//! [Border]
//! [Footer - 2 lines]
//! ```

mod details;
mod empty;
mod footer;
mod header;
mod search;
mod suggestions;

use crate::ui::helpers::{centered_padding, display_width, Canvas};
use crate::ui::viewmodel::{Body, SearchScreen, UIViewModel};

/// Horizontal margin shared by the search box, suggestions, and details.
pub const CONTENT_MARGIN: usize = 5;

/// First row below the header and its border.
const BODY_START_ROW: usize = 4;

/// Draws a full-width separator at `row` and returns the next free row.
fn render_border(canvas: &mut Canvas<'_>, row: usize, cols: usize) -> usize {
    let border = &canvas.theme().colors.border;
    canvas.move_to(row, 1);
    canvas.fg(border);
    canvas.text(&"─".repeat(cols));
    canvas.reset();
    row + 1
}

/// Renders a whole frame for `vm`.
pub fn render_frame(canvas: &mut Canvas<'_>, vm: &UIViewModel, rows: usize, cols: usize) {
    canvas.clear(rows, cols);

    let row = header::render_header(canvas, 2, &vm.header, cols);
    render_border(canvas, row, cols);

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let last_body_row = border_row.saturating_sub(2);

    match &vm.body {
        Body::Search(screen) => render_search_screen(canvas, screen, last_body_row, cols),
        Body::Details(screen) => details::render_details(canvas, BODY_START_ROW, last_body_row, screen, cols),
        Body::Empty(empty) => {
            empty::render_empty_state(canvas, BODY_START_ROW + 2, empty, cols);
        }
    }

    render_border(canvas, border_row, cols);
    footer::render_footer(canvas, footer_row, &vm.footer, cols);
}

fn render_search_screen(canvas: &mut Canvas<'_>, screen: &SearchScreen, last_body_row: usize, cols: usize) {
    let colors = &canvas.theme().colors;

    canvas.move_to(BODY_START_ROW, 1);
    canvas.bold();
    canvas.fg(&colors.header_fg);
    canvas.pad(centered_padding(display_width(&screen.heading), cols));
    canvas.text(&screen.heading);
    canvas.reset();

    let mut row = search::render_search_bar(canvas, BODY_START_ROW + 2, &screen.search_bar, cols);
    row = suggestions::render_scroll_shadow(canvas, row, screen.scrolled, cols);
    row = suggestions::render_suggestions(canvas, row, &screen.items, cols);

    if let Some(summary) = &screen.summary {
        if row <= last_body_row + 1 {
            canvas.move_to(row, CONTENT_MARGIN + 3);
            canvas.fg(&colors.text_dim);
            canvas.text(summary);
            canvas.reset();
        }
    }
}
