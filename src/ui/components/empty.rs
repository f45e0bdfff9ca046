//! Empty state component renderer.

use crate::ui::helpers::{centered_padding, display_width, Canvas};
use crate::ui::viewmodel::EmptyState;

/// Renders a centered message with a dimmed subtitle below it.
pub fn render_empty_state(canvas: &mut Canvas<'_>, row: usize, empty: &EmptyState, cols: usize) -> usize {
    let colors = &canvas.theme().colors;

    canvas.move_to(row, 1);
    canvas.fg(&colors.empty_state_fg);
    canvas.pad(centered_padding(display_width(&empty.message), cols));
    canvas.text(&empty.message);
    canvas.reset();

    canvas.move_to(row + 1, 1);
    canvas.dim();
    canvas.fg(&colors.text_dim);
    canvas.pad(centered_padding(display_width(&empty.subtitle), cols));
    canvas.text(&empty.subtitle);
    canvas.reset();

    row + 2
}
