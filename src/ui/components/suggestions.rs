//! Suggestion list component renderer.
//!
//! One row per suggestion: title with query matches highlighted, year, and a
//! poster marker. The highlighted row gets the selection colors across its full
//! width.

use super::CONTENT_MARGIN;
use crate::ui::helpers::{self, display_width, Canvas};
use crate::ui::viewmodel::DisplayItem;

const YEAR_WIDTH: usize = 11;

/// Draws the scroll shadow at `row` when the list no longer starts at its
/// first entry, and a blank row otherwise.
pub fn render_scroll_shadow(canvas: &mut Canvas<'_>, row: usize, scrolled: bool, cols: usize) -> usize {
    if scrolled {
        let shadow = &canvas.theme().colors.shadow;
        canvas.move_to(row, CONTENT_MARGIN + 1);
        canvas.fg(shadow);
        canvas.text(&"▔".repeat(cols.saturating_sub(CONTENT_MARGIN * 2)));
        canvas.reset();
    }
    row + 1
}

/// Renders all suggestion rows starting at `row` and returns the next free row.
pub fn render_suggestions(canvas: &mut Canvas<'_>, row: usize, items: &[DisplayItem], cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_suggestion(canvas, current_row, item, cols);
    }
    current_row
}

fn render_suggestion(canvas: &mut Canvas<'_>, row: usize, item: &DisplayItem, cols: usize) -> usize {
    let colors = &canvas.theme().colors;
    let row_width = cols.saturating_sub(CONTENT_MARGIN * 2);

    canvas.move_to(row, CONTENT_MARGIN + 1);
    if item.is_selected {
        canvas.fg(&colors.selection_fg);
        canvas.bg(&colors.selection_bg);
        canvas.text("▌ ");
    } else {
        canvas.fg(&colors.text_normal);
        canvas.pad(2);
    }

    helpers::render_highlighted_text(canvas, &item.title, &item.highlight_ranges, item.is_selected);

    let marker = if item.has_poster { "▣" } else { "□" };
    let used = 2 + display_width(&item.title);
    let year_col = row_width.saturating_sub(YEAR_WIDTH + 2);
    canvas.pad(year_col.saturating_sub(used).max(1));

    if !item.is_selected {
        canvas.fg(&colors.text_dim);
    }
    canvas.text(&format!("{:<width$}", item.year, width = YEAR_WIDTH));
    canvas.text(marker);
    canvas.pad(1);
    canvas.reset();

    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Theme;

    fn item(title: &str, selected: bool) -> DisplayItem {
        DisplayItem {
            title: title.to_string(),
            year: "1999".to_string(),
            poster: "placeholder.png".to_string(),
            has_poster: false,
            is_selected: selected,
            highlight_ranges: vec![],
        }
    }

    #[test]
    fn selected_row_uses_selection_colors() {
        let theme = Theme::default();
        let mut canvas = Canvas::new(&theme);
        render_suggestions(&mut canvas, 10, &[item("The Matrix", false), item("Matrix Reloaded", true)], 80);
        let out = canvas.into_string();
        assert!(out.contains(&format!("{}▌ Matrix Reloaded", Theme::bg(&theme.colors.selection_bg))));
        assert!(out.contains("\u{1b}[10;6H"));
        assert!(out.contains("\u{1b}[11;6H"));
    }

    #[test]
    fn shadow_only_when_scrolled() {
        let theme = Theme::default();
        let mut canvas = Canvas::new(&theme);
        assert_eq!(render_scroll_shadow(&mut canvas, 9, false, 80), 10);
        assert!(!canvas.as_str().contains('▔'));
        render_scroll_shadow(&mut canvas, 9, true, 80);
        assert!(canvas.as_str().contains('▔'));
    }
}
