//! Search box component renderer.

use super::CONTENT_MARGIN;
use crate::ui::helpers::{clip, display_width, Canvas};
use crate::ui::viewmodel::SearchBarInfo;

/// Renders the 3-line search box at `row` and returns the next free row.
///
/// ```text
/// [margin] ┌─────────────────────┐
/// [margin] │ ⌕ Search for movies │
/// [margin] └─────────────────────┘
/// ```
///
/// The frame takes the accent color while the box has focus and the border
/// color otherwise. An empty query shows the dimmed placeholder.
pub fn render_search_bar(canvas: &mut Canvas<'_>, row: usize, search: &SearchBarInfo, cols: usize) -> usize {
    let colors = &canvas.theme().colors;
    let frame = if search.focused { &colors.accent } else { &colors.border };
    let inner_width = cols.saturating_sub(CONTENT_MARGIN * 2 + 2);

    canvas.move_to(row, CONTENT_MARGIN + 1);
    canvas.fg(frame);
    canvas.text(&format!("┌{}┐", "─".repeat(inner_width)));

    canvas.move_to(row + 1, CONTENT_MARGIN + 1);
    canvas.text("│");
    canvas.fg(&colors.text_dim);
    canvas.text(" ⌕ ");
    let text_width = inner_width.saturating_sub(4);
    let shown = if search.query.is_empty() {
        clip(&search.placeholder, text_width)
    } else {
        canvas.fg(&colors.text_normal);
        let chars = display_width(&search.query);
        search.query.chars().skip(chars.saturating_sub(text_width)).collect()
    };
    canvas.text(&shown);
    if search.focused && display_width(&shown) < text_width {
        canvas.fg(&colors.accent);
        canvas.text("▏");
        canvas.pad(text_width - display_width(&shown) - 1);
    } else {
        canvas.pad(text_width.saturating_sub(display_width(&shown)));
    }
    canvas.pad(1);
    canvas.fg(frame);
    canvas.text("│");

    canvas.move_to(row + 2, CONTENT_MARGIN + 1);
    canvas.text(&format!("└{}┘", "─".repeat(inner_width)));
    canvas.reset();

    row + 3
}
