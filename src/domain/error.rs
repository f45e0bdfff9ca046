//! Error types for the MovieSearch plugin.
//!
//! This module defines the centralized error type [`MovieSearchError`] and a type alias
//! [`Result`] used throughout the crate. None of these errors are fatal: the event
//! loop logs them and degrades the affected view to an empty or loading state.

use thiserror::Error;

/// The main error type for MovieSearch operations.
///
/// Variants follow the three failure classes the plugin distinguishes: transport
/// failures (`Http`), malformed or empty payloads (`Decode`, `NotFound`), and bad
/// route parameters (`Route`). The remaining variants cover configuration and
/// local file access.
///
/// # Examples
///
/// ```
/// use moviesearch::MovieSearchError;
///
/// let err = MovieSearchError::Route("/movie/".to_string());
/// assert_eq!(err.to_string(), "Invalid route: /movie/");
/// ```
#[derive(Debug, Error)]
pub enum MovieSearchError {
    /// The lookup service answered with a non-success status.
    ///
    /// Zellij reports transport failures (DNS, TLS, connection refused) through
    /// the same channel, so this variant covers both.
    #[error("HTTP error: status {status}: {message}")]
    Http {
        /// HTTP status code reported by the host.
        status: u16,
        /// Response body, lossily decoded, for the log line.
        message: String,
    },

    /// The response body was not the JSON shape we expect.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The lookup service answered `"Response": "False"`.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A route path could not be parsed, or its identifier segment is empty.
    #[error("Invalid route: {0}")]
    Route(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme file could not be parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for MovieSearch operations.
pub type Result<T> = std::result::Result<T, MovieSearchError>;
