//! Header component renderer.
//!
//! Centered title with the theme toggle indicator at the right edge.

use crate::ui::helpers::{centered_padding, display_width, Canvas};
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header at `row` and returns the next free row.
///
/// ```text
/// [padding] TITLE [padding] ☾ dark
/// ```
pub fn render_header(canvas: &mut Canvas<'_>, row: usize, header: &HeaderInfo, cols: usize) -> usize {
    let colors = &canvas.theme().colors;
    let title_len = display_width(&header.title);
    let label_len = display_width(&header.theme_label);
    let padding = centered_padding(title_len, cols);

    canvas.move_to(row, 1);
    if let Some(bg) = &colors.header_bg {
        canvas.bg(bg);
    }
    canvas.bold();
    canvas.fg(&colors.header_fg);
    canvas.pad(padding);
    canvas.text(&header.title);

    let right = cols.saturating_sub(padding + title_len);
    if right > label_len + 1 {
        canvas.pad(right - label_len - 1);
        canvas.fg(&colors.accent);
        canvas.text(&header.theme_label);
        canvas.pad(1);
    } else {
        canvas.pad(right);
    }

    canvas.reset();
    row + 1
}
