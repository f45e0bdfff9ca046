//! Domain layer for the MovieSearch plugin.
//!
//! Core types independent of Zellij APIs: the movie model produced by the
//! lookup service, the two logical routes, and the crate error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`movie`]: Search results, full movie records, posters
//! - [`route`]: Search and details routes with path parsing

pub mod error;
pub mod movie;
pub mod route;

pub use error::{MovieSearchError, Result};
pub use movie::{MovieRecord, Poster, SearchPage, SearchResultItem, PLACEHOLDER_POSTER, POSTER_SENTINEL};
pub use route::Route;
