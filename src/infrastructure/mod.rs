//! Infrastructure layer for sandbox paths.
//!
//! The plugin reads theme files through the `/host` mount and writes its span
//! log under `/data`.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, span_file};
