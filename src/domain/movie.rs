//! Movie domain model.
//!
//! These types are what the lookup service hands back once decoded. They are
//! immutable snapshots: a search page lives as long as the suggestion list that
//! displays it, a [`MovieRecord`] as long as one visit to the details view.

/// Poster value the lookup service uses for "no image available".
pub const POSTER_SENTINEL: &str = "N/A";

/// Local image shown in place of a missing poster.
pub const PLACEHOLDER_POSTER: &str = "placeholder.png";

/// A poster reference: either a remote image or the local placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poster {
    /// Remote image URL.
    Url(String),
    /// No image available; rendered with [`PLACEHOLDER_POSTER`].
    Placeholder,
}

impl Poster {
    /// Interprets a raw poster field from the wire.
    ///
    /// The sentinel `"N/A"` and blank values both map to [`Poster::Placeholder`],
    /// so a missing poster never turns into a request for a broken URL.
    ///
    /// ```
    /// use moviesearch::domain::Poster;
    ///
    /// assert_eq!(Poster::from_wire("N/A"), Poster::Placeholder);
    /// assert!(matches!(Poster::from_wire("https://img/x.jpg"), Poster::Url(_)));
    /// ```
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == POSTER_SENTINEL {
            Self::Placeholder
        } else {
            Self::Url(raw.to_string())
        }
    }

    /// Image source to display: the remote URL or the local placeholder.
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Self::Url(url) => url,
            Self::Placeholder => PLACEHOLDER_POSTER,
        }
    }

    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// One candidate in the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultItem {
    /// Opaque identifier used in the details route (an IMDb id such as `tt0133093`).
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster: Poster,
}

/// A decoded search response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    /// Matches in the order the service returned them. Not yet truncated.
    pub items: Vec<SearchResultItem>,

    /// Total match count the service reports, which may exceed `items.len()`.
    pub total_results: Option<u32>,
}

impl SearchPage {
    /// A page with no matches. Error-shaped responses decode to this.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Full record for the details view.
///
/// Every textual field is kept as the service formats it (`"136 min"`,
/// `"8.7"`); absent fields hold `"N/A"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    pub title: String,
    pub year: String,
    /// Content rating, e.g. `"R"`.
    pub rated: String,
    /// IMDb rating out of ten.
    pub rating: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub plot: String,
    pub language: String,
    pub awards: String,
    pub poster: Poster,
    pub cast: String,
}

impl MovieRecord {
    /// Rating formatted the way the details view shows it (`"8.7/10"`).
    #[must_use]
    pub fn rating_label(&self) -> String {
        if self.rating == POSTER_SENTINEL {
            self.rating.clone()
        } else {
            format!("{}/10", self.rating)
        }
    }
}
