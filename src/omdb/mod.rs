//! Client side of the external movie metadata service (OMDb).
//!
//! The plugin never performs I/O here. [`OmdbClient`] turns lookups into
//! [`LookupRequest`]s that the plugin shim passes to Zellij's `web_request`;
//! Zellij later delivers the status, body, and echoed [`RequestContext`] as an
//! event, and [`decode_search`] / [`decode_details`] turn the body into domain
//! types.
//!
//! # Modules
//!
//! - `client`: URL construction and request tagging
//! - `context`: Request metadata round-tripped through the host
//! - `response`: Wire types and decoding

mod client;
mod context;
mod response;

pub use client::{LookupRequest, OmdbClient, DEFAULT_BASE_URL};
pub use context::{LookupKind, RequestContext, TraceContext};
pub use response::{decode_details, decode_search};
