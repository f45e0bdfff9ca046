//! Request construction for the lookup service.

use super::context::{LookupKind, RequestContext, TraceContext};
use crate::domain::error::{MovieSearchError, Result};

/// Public endpoint of the OMDb API.
pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com";

/// A request ready to hand to the host's HTTP facility.
#[derive(Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub url: String,
    /// Metadata echoed back with the response so it can be routed to its view.
    pub context: RequestContext,
}

/// Builds lookup URLs for one API key and base URL.
///
/// The client does no I/O itself; Zellij performs the request and delivers the
/// result as an event.
#[derive(Clone, PartialEq, Eq)]
pub struct OmdbClient {
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    /// Creates a client.
    ///
    /// # Errors
    ///
    /// Returns [`MovieSearchError::Config`] if the key is blank.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(MovieSearchError::Config("api_key is empty".to_string()));
        }
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Ok(Self { api_key, base_url })
    }

    /// URL for a title-substring search.
    ///
    /// ```
    /// use moviesearch::omdb::OmdbClient;
    ///
    /// let client = OmdbClient::new("k3y", "https://www.omdbapi.com").unwrap();
    /// assert_eq!(
    ///     client.search_url("star wars"),
    ///     "https://www.omdbapi.com/?apikey=k3y&s=star%20wars"
    /// );
    /// ```
    #[must_use]
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/?apikey={}&s={}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(query)
        )
    }

    /// URL for a full record by identifier, including the long plot.
    #[must_use]
    pub fn details_url(&self, id: &str) -> String {
        format!(
            "{}/?apikey={}&i={}&plot=full",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(id)
        )
    }

    /// Builds a search request tagged for the given view and sequence number.
    #[must_use]
    pub fn search(&self, view: u64, seq: u64, query: &str) -> LookupRequest {
        LookupRequest {
            url: self.search_url(query),
            context: RequestContext {
                kind: LookupKind::Search { query: query.to_string() },
                view,
                seq,
                trace: TraceContext::from_current(),
            },
        }
    }

    /// Builds a details request tagged for the given view.
    #[must_use]
    pub fn details(&self, view: u64, id: &str) -> LookupRequest {
        LookupRequest {
            url: self.details_url(id),
            context: RequestContext {
                kind: LookupKind::Details { id: id.to_string() },
                view,
                seq: 0,
                trace: TraceContext::from_current(),
            },
        }
    }
}

impl std::fmt::Debug for LookupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The URL carries the API key.
        f.debug_struct("LookupRequest")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for OmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OmdbClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OmdbClient {
        OmdbClient::new("secret", "https://example.test/").expect("valid client")
    }

    #[test]
    fn rejects_blank_key() {
        assert!(matches!(
            OmdbClient::new("  ", DEFAULT_BASE_URL),
            Err(MovieSearchError::Config(_))
        ));
    }

    #[test]
    fn search_url_encodes_query() {
        assert_eq!(
            client().search_url("amélie & co"),
            "https://example.test/?apikey=secret&s=am%C3%A9lie%20%26%20co"
        );
    }

    #[test]
    fn details_url_requests_full_plot() {
        assert_eq!(
            client().details_url("tt0133093"),
            "https://example.test/?apikey=secret&i=tt0133093&plot=full"
        );
    }

    #[test]
    fn requests_carry_view_and_sequence() {
        let request = client().search(7, 3, "batman");
        assert_eq!(request.context.view, 7);
        assert_eq!(request.context.seq, 3);
        assert_eq!(
            request.context.kind,
            LookupKind::Search { query: "batman".to_string() }
        );
    }

    #[test]
    fn debug_output_hides_key() {
        let rendered = format!("{:?}", client());
        assert!(!rendered.contains("secret"));
        let rendered = format!("{:?}", client().details(1, "tt0133093"));
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("tt0133093"));
    }
}
