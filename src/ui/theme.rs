//! Theme management and ANSI escape sequence generation.
//!
//! Two palettes ship with the plugin, `light` and `dark`, and the application
//! flag picks one of them per render. Either can be replaced by a TOML file.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-dark"
//!
//! [colors]
//! background = "#111827"
//! header_fg = "#f9fafb"
//! text_normal = "#f3f4f6"
//! text_dim = "#9ca3af"
//! border = "#374151"
//! accent = "#60a5fa"
//! selection_fg = "#f9fafb"
//! selection_bg = "#374151"
//! match_highlight_fg = "#fef9c3"
//! match_highlight_bg = "#854d0e"
//! empty_state_fg = "#60a5fa"
//! rating_fg = "#facc15"
//! shadow = "#030712"
//! ```
//!
//! # Example
//!
//! ```rust
//! use moviesearch::ui::theme::Theme;
//!
//! let theme = Theme::from_name("dark").unwrap();
//! println!("{}", Theme::fg(&theme.colors.header_fg));
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::error::{MovieSearchError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. "#f3f4f6").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Page background, painted behind every row.
    pub background: String,

    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub text_normal: String,
    /// Secondary text: labels, footer, placeholders.
    pub text_dim: String,

    pub border: String,

    /// Focus ring and interactive accents.
    pub accent: String,

    pub selection_fg: String,
    pub selection_bg: String,

    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    pub rating_fg: String,

    /// Edge shown above the suggestion list once it has scrolled.
    pub shadow: String,
}

impl Theme {
    /// Loads a built-in theme by name: `light` or `dark`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "light" => include_str!("../../themes/light.toml"),
            "dark" => include_str!("../../themes/dark.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`MovieSearchError::Theme`] if the file cannot be read or is not
    /// a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| MovieSearchError::Theme(format!("failed to read {}: {e}", path.as_ref().display())))?;

        toml::from_str(&contents).map_err(|e| MovieSearchError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Built-in light palette.
    #[must_use]
    pub fn light() -> Self {
        Self::from_name("light").unwrap_or_else(|| Self::plain("light", "#ffffff", "#000000"))
    }

    /// Built-in dark palette.
    #[must_use]
    pub fn dark() -> Self {
        Self::from_name("dark").unwrap_or_else(|| Self::plain("dark", "#000000", "#ffffff"))
    }

    /// Two-color palette used if a built-in asset fails to parse.
    fn plain(name: &str, background: &str, foreground: &str) -> Self {
        let fg = foreground.to_string();
        Self {
            name: name.to_string(),
            colors: ThemeColors {
                background: background.to_string(),
                header_fg: fg.clone(),
                header_bg: None,
                text_normal: fg.clone(),
                text_dim: fg.clone(),
                border: fg.clone(),
                accent: fg.clone(),
                selection_fg: background.to_string(),
                selection_bg: fg.clone(),
                match_highlight_fg: background.to_string(),
                match_highlight_bg: fg.clone(),
                empty_state_fg: fg.clone(),
                rating_fg: fg.clone(),
                shadow: fg,
            },
        }
    }

    /// Parses `#rrggbb`; anything else renders as white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// The light and dark palettes; views receive whichever the flag selects.
#[derive(Debug, Clone)]
pub struct ThemeSet {
    pub light: Theme,
    pub dark: Theme,
}

impl ThemeSet {
    /// Built-in palettes, each optionally replaced by a TOML file.
    ///
    /// A file that fails to load is logged and the built-in palette is kept.
    #[must_use]
    pub fn load(light_file: Option<&str>, dark_file: Option<&str>) -> Self {
        Self {
            light: load_or(light_file, Theme::light),
            dark: load_or(dark_file, Theme::dark),
        }
    }

    #[must_use]
    pub const fn pick(&self, dark_mode: bool) -> &Theme {
        if dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}

impl Default for ThemeSet {
    fn default() -> Self {
        Self {
            light: Theme::light(),
            dark: Theme::dark(),
        }
    }
}

fn load_or(file: Option<&str>, fallback: fn() -> Theme) -> Theme {
    let Some(file) = file else {
        return fallback();
    };
    let path = crate::infrastructure::paths::expand_tilde(file);
    Theme::from_file(&path).unwrap_or_else(|e| {
        tracing::warn!(theme_file = %path.display(), error = %e, "failed to load theme from file, using built-in");
        fallback()
    })
}
