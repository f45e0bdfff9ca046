//! Shared rendering utilities.
//!
//! Components draw into a [`Canvas`], an ANSI string buffer bound to the active
//! theme, instead of writing to stdout directly. The renderer prints the buffer
//! once per frame, and tests inspect it.
//!
//! # Example
//!
//! ```rust
//! use moviesearch::ui::helpers::{render_highlighted_text, Canvas};
//! use moviesearch::ui::Theme;
//!
//! let theme = Theme::default();
//! let mut canvas = Canvas::new(&theme);
//! canvas.move_to(2, 1);
//! render_highlighted_text(&mut canvas, "The Matrix", &[(4, 10)], false);
//! assert!(canvas.as_str().contains("Matrix"));
//! ```

use crate::ui::theme::Theme;

/// ANSI output buffer for one frame.
#[derive(Debug)]
pub struct Canvas<'t> {
    buf: String,
    theme: &'t Theme,
}

impl<'t> Canvas<'t> {
    /// Starts a frame with the theme's page background active.
    #[must_use]
    pub fn new(theme: &'t Theme) -> Self {
        let mut canvas = Self {
            buf: String::new(),
            theme,
        };
        canvas.reset();
        canvas
    }

    #[must_use]
    pub const fn theme(&self) -> &'t Theme {
        self.theme
    }

    /// Positions the cursor; coordinates are 1-indexed.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    pub fn text(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    pub fn pad(&mut self, width: usize) {
        self.buf.push_str(&" ".repeat(width));
    }

    pub fn fg(&mut self, hex: &str) {
        self.buf.push_str(&Theme::fg(hex));
    }

    pub fn bg(&mut self, hex: &str) {
        self.buf.push_str(&Theme::bg(hex));
    }

    pub fn bold(&mut self) {
        self.buf.push_str(Theme::bold());
    }

    pub fn dim(&mut self) {
        self.buf.push_str(Theme::dim());
    }

    /// Clears styling, then restores the page background.
    pub fn reset(&mut self) {
        self.buf.push_str(Theme::reset());
        let background = Theme::bg(&self.theme.colors.background);
        self.buf.push_str(&background);
    }

    /// Paints every row with the page background.
    pub fn clear(&mut self, rows: usize, cols: usize) {
        for row in 1..=rows {
            self.move_to(row, 1);
            self.pad(cols);
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(mut self) -> String {
        self.buf.push_str(Theme::reset());
        self.buf
    }
}

/// Number of terminal columns `text` occupies, counting one per character.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Left padding that centers `width` columns within `cols`.
#[must_use]
pub const fn centered_padding(width: usize, cols: usize) -> usize {
    cols.saturating_sub(width) / 2
}

/// Shortens `text` to `width` characters.
#[must_use]
pub fn clip(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Greedy word wrap to `width` columns. Words longer than a line are split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            lines.push(word.drain(..width).collect());
        }
        let word: String = word.into_iter().collect();
        let needed = display_width(&word) + usize::from(!line.is_empty());
        if display_width(&line) + needed > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Draws `text` with the given character ranges in match-highlight colors.
///
/// Selected rows are drawn plain so the highlight does not fight the
/// selection background. The caller's colors are restored after each range.
pub fn render_highlighted_text(canvas: &mut Canvas<'_>, text: &str, ranges: &[(usize, usize)], is_selected: bool) {
    if ranges.is_empty() || is_selected {
        canvas.text(text);
        return;
    }

    let colors = &canvas.theme().colors;
    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }
        if start > current_pos {
            canvas.text(&chars[current_pos..start].iter().collect::<String>());
        }

        canvas.fg(&colors.match_highlight_fg);
        canvas.bg(&colors.match_highlight_bg);
        canvas.text(&chars[start..end].iter().collect::<String>());
        canvas.reset();
        canvas.fg(&colors.text_normal);

        current_pos = end;
    }

    if current_pos < chars.len() {
        canvas.text(&chars[current_pos..].iter().collect::<String>());
    }
}
