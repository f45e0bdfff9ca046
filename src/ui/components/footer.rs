//! Footer component renderer: keybinding hints above a copyright notice.

use crate::ui::helpers::{centered_padding, clip, display_width, Canvas};
use crate::ui::viewmodel::FooterInfo;

/// Renders the two footer lines starting at `row`, truncating to the width.
pub fn render_footer(canvas: &mut Canvas<'_>, row: usize, footer: &FooterInfo, cols: usize) -> usize {
    let colors = &canvas.theme().colors;

    for (offset, line) in [&footer.keybindings, &footer.notice].into_iter().enumerate() {
        let text = clip(line, cols);
        let padding = centered_padding(display_width(&text), cols);

        canvas.move_to(row + offset, 1);
        canvas.fg(&colors.text_dim);
        canvas.pad(padding);
        canvas.text(&text);
        canvas.reset();
    }
    row + 2
}
