//! Decoding of lookup service responses.
//!
//! The service speaks PascalCase JSON and signals failures in-band with
//! `"Response": "False"` plus an `"Error"` message, usually under HTTP 200.
//! Searches treat that shape as "no matches"; details lookups treat it as a
//! failure so the view stays on its loading placeholder.

use crate::domain::error::{MovieSearchError, Result};
use crate::domain::{MovieRecord, Poster, SearchPage, SearchResultItem, POSTER_SENTINEL};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(rename = "Search", default)]
    search: Option<Vec<SearchHit>>,
    #[serde(rename = "totalResults", default)]
    total_results: Option<String>,
    #[serde(rename = "Error", default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year", default = "not_available")]
    year: String,
    #[serde(rename = "Poster", default = "not_available")]
    poster: String,
}

#[derive(Debug, Deserialize)]
struct DetailsEnvelope {
    #[serde(rename = "Response", default)]
    response: Option<String>,
    #[serde(rename = "Error", default)]
    error: Option<String>,
    #[serde(rename = "Title", default = "not_available")]
    title: String,
    #[serde(rename = "Year", default = "not_available")]
    year: String,
    #[serde(rename = "Rated", default = "not_available")]
    rated: String,
    #[serde(rename = "imdbRating", default = "not_available")]
    imdb_rating: String,
    #[serde(rename = "Runtime", default = "not_available")]
    runtime: String,
    #[serde(rename = "Genre", default = "not_available")]
    genre: String,
    #[serde(rename = "Director", default = "not_available")]
    director: String,
    #[serde(rename = "Plot", default = "not_available")]
    plot: String,
    #[serde(rename = "Language", default = "not_available")]
    language: String,
    #[serde(rename = "Awards", default = "not_available")]
    awards: String,
    #[serde(rename = "Poster", default = "not_available")]
    poster: String,
    #[serde(rename = "Actors", default = "not_available")]
    actors: String,
}

fn not_available() -> String {
    POSTER_SENTINEL.to_string()
}

fn check_status(status: u16, body: &[u8]) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(MovieSearchError::Http {
            status,
            message: String::from_utf8_lossy(body).chars().take(200).collect(),
        })
    }
}

/// Decodes a search response.
///
/// # Errors
///
/// Returns [`MovieSearchError::Http`] for non-2xx statuses and
/// [`MovieSearchError::Decode`] for bodies that are not a JSON object of the
/// expected shape. An in-band error such as `"Movie not found!"` is not an
/// error here; it yields an empty page.
pub fn decode_search(status: u16, body: &[u8]) -> Result<SearchPage> {
    check_status(status, body)?;
    let envelope: SearchEnvelope = serde_json::from_slice(body)?;

    let Some(hits) = envelope.search else {
        tracing::debug!(error = ?envelope.error, "search returned no matches");
        return Ok(SearchPage::empty());
    };

    let items = hits
        .into_iter()
        .map(|hit| SearchResultItem {
            id: hit.imdb_id,
            title: hit.title,
            year: hit.year,
            poster: Poster::from_wire(&hit.poster),
        })
        .collect();

    Ok(SearchPage {
        items,
        total_results: envelope.total_results.and_then(|t| t.trim().parse().ok()),
    })
}

/// Decodes a details response.
///
/// # Errors
///
/// Returns [`MovieSearchError::Http`] for non-2xx statuses,
/// [`MovieSearchError::Decode`] for malformed bodies, and
/// [`MovieSearchError::NotFound`] for `"Response": "False"` payloads.
pub fn decode_details(status: u16, body: &[u8]) -> Result<MovieRecord> {
    check_status(status, body)?;
    let envelope: DetailsEnvelope = serde_json::from_slice(body)?;

    if envelope.response.as_deref() == Some("False") {
        return Err(MovieSearchError::NotFound(
            envelope.error.unwrap_or_else(|| "unknown error".to_string()),
        ));
    }

    Ok(MovieRecord {
        title: envelope.title,
        year: envelope.year,
        rated: envelope.rated,
        rating: envelope.imdb_rating,
        runtime: envelope.runtime,
        genre: envelope.genre,
        director: envelope.director,
        plot: envelope.plot,
        language: envelope.language,
        awards: envelope.awards,
        poster: Poster::from_wire(&envelope.poster),
        cast: envelope.actors,
    })
}
