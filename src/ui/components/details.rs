//! Details screen component renderer.
//!
//! While loading, a centered placeholder. Once a record is in, the title, a
//! two-column grid of facts, and titled paragraphs, all drawn in the dimmed
//! palette until the entrance transition finishes or while exiting.

use super::CONTENT_MARGIN;
use crate::ui::helpers::{centered_padding, clip, display_width, wrap, Canvas};
use crate::ui::viewmodel::{DetailsContent, DetailsScreen};

/// Renders the details body between `row` and `last_row` inclusive.
pub fn render_details(canvas: &mut Canvas<'_>, row: usize, last_row: usize, screen: &DetailsScreen, cols: usize) {
    match screen {
        DetailsScreen::Loading { movie_id, exiting } => render_loading(canvas, row + 2, movie_id, *exiting, cols),
        DetailsScreen::Loaded(content) => render_content(canvas, row + 1, last_row, content, cols),
    }
}

fn render_loading(canvas: &mut Canvas<'_>, row: usize, movie_id: &str, exiting: bool, cols: usize) {
    let colors = &canvas.theme().colors;
    let message = "Loading movie details...";

    canvas.move_to(row, 1);
    canvas.fg(if exiting { &colors.text_dim } else { &colors.empty_state_fg });
    canvas.pad(centered_padding(display_width(message), cols));
    canvas.text(message);
    canvas.reset();

    canvas.move_to(row + 1, 1);
    canvas.dim();
    canvas.fg(&colors.text_dim);
    canvas.pad(centered_padding(display_width(movie_id), cols));
    canvas.text(movie_id);
    canvas.reset();
}

fn render_content(canvas: &mut Canvas<'_>, row: usize, last_row: usize, content: &DetailsContent, cols: usize) {
    let colors = &canvas.theme().colors;
    let width = cols.saturating_sub(CONTENT_MARGIN * 2);
    let (text_fg, label_fg, title_fg) = if content.dimmed {
        (&colors.text_dim, &colors.text_dim, &colors.text_dim)
    } else {
        (&colors.text_normal, &colors.text_dim, &colors.header_fg)
    };

    let mut current_row = row;
    canvas.move_to(current_row, CONTENT_MARGIN + 1);
    if !content.dimmed {
        canvas.bold();
    }
    canvas.fg(title_fg);
    canvas.text(&clip(&content.title, width));
    canvas.reset();
    current_row += 2;

    let column_width = width / 2;
    for pair in content.facts.chunks(2) {
        if current_row > last_row {
            return;
        }
        for (col_idx, (label, value)) in pair.iter().enumerate() {
            canvas.move_to(current_row, CONTENT_MARGIN + 1 + col_idx * column_width);
            canvas.fg(label_fg);
            canvas.text(&format!("{label}: "));
            let value_fg = if label == "Rating" && !content.dimmed { &colors.rating_fg } else { text_fg };
            canvas.fg(value_fg);
            canvas.text(&clip(value, column_width.saturating_sub(display_width(label) + 3)));
            canvas.reset();
        }
        current_row += 1;
    }

    for (label, body) in &content.sections {
        current_row += 1;
        if current_row > last_row {
            return;
        }
        canvas.move_to(current_row, CONTENT_MARGIN + 1);
        if !content.dimmed {
            canvas.bold();
        }
        canvas.fg(if content.dimmed { label_fg } else { &colors.accent });
        canvas.text(label);
        canvas.reset();
        current_row += 1;

        for line in wrap(body, width) {
            if current_row > last_row {
                return;
            }
            canvas.move_to(current_row, CONTENT_MARGIN + 1);
            canvas.fg(text_fg);
            canvas.text(&line);
            canvas.reset();
            current_row += 1;
        }
    }

    current_row += 1;
    if current_row <= last_row {
        let poster = if content.has_poster {
            content.poster.clone()
        } else {
            format!("{} (no artwork)", content.poster)
        };
        canvas.move_to(current_row, CONTENT_MARGIN + 1);
        canvas.fg(label_fg);
        canvas.text("Poster: ");
        canvas.fg(text_fg);
        canvas.text(&clip(&poster, width.saturating_sub(8)));
        canvas.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Theme;

    fn content(dimmed: bool) -> DetailsContent {
        DetailsContent {
            title: "The Matrix".to_string(),
            facts: vec![
                ("Year".to_string(), "1999".to_string()),
                ("Rating".to_string(), "8.7/10".to_string()),
            ],
            sections: vec![("Plot".to_string(), "A hacker learns the truth.".to_string())],
            poster: "placeholder.png".to_string(),
            has_poster: false,
            dimmed,
        }
    }

    #[test]
    fn loaded_content_shows_record_fields() {
        let theme = Theme::default();
        let mut canvas = Canvas::new(&theme);
        render_details(&mut canvas, 4, 30, &DetailsScreen::Loaded(content(false)), 80);
        let out = canvas.into_string();
        for needle in ["The Matrix", "Year: ", "1999", "8.7/10", "Plot", "A hacker learns the truth.", "placeholder.png (no artwork)"] {
            assert!(out.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn dimmed_content_uses_dim_title() {
        let theme = Theme::default();
        let mut canvas = Canvas::new(&theme);
        render_details(&mut canvas, 4, 30, &DetailsScreen::Loaded(content(true)), 80);
        let out = canvas.into_string();
        assert!(out.contains(&format!("{}The Matrix", Theme::fg(&theme.colors.text_dim))));
    }

    #[test]
    fn content_is_cut_at_last_row() {
        let theme = Theme::default();
        let mut canvas = Canvas::new(&theme);
        render_details(&mut canvas, 4, 7, &DetailsScreen::Loaded(content(false)), 80);
        assert!(!canvas.as_str().contains("Plot"));
    }

    #[test]
    fn loading_placeholder_names_the_movie() {
        let theme = Theme::default();
        let mut canvas = Canvas::new(&theme);
        let screen = DetailsScreen::Loading { movie_id: "tt0133093".to_string(), exiting: false };
        render_details(&mut canvas, 4, 30, &screen, 80);
        let out = canvas.into_string();
        assert!(out.contains("Loading movie details..."));
        assert!(out.contains("tt0133093"));
    }
}
