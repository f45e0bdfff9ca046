//! Path helpers for the Zellij plugin sandbox.
//!
//! Inside the sandbox the plugin's own data folder is mounted at `/data` and the
//! host filesystem, rooted at the directory Zellij was started from, at `/host`.

use std::path::PathBuf;

/// File name of the span log inside the data directory.
pub const SPAN_FILE_NAME: &str = "moviesearch-spans.jsonl";

/// Per-plugin data directory.
///
/// ```
/// use moviesearch::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/data"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/data")
}

/// Where exported spans are written.
#[must_use]
pub fn span_file() -> PathBuf {
    get_data_dir().join(SPAN_FILE_NAME)
}

/// Maps `~` paths from the configuration onto the `/host` mount.
///
/// ```
/// use moviesearch::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("~/themes/night.toml"), PathBuf::from("/host/themes/night.toml"));
/// assert_eq!(expand_tilde("~"), PathBuf::from("/host"));
/// assert_eq!(expand_tilde("/data/theme.toml"), PathBuf::from("/data/theme.toml"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some("") => PathBuf::from("/host"),
        Some(rest) if rest.starts_with('/') => PathBuf::from(format!("/host{rest}")),
        _ => PathBuf::from(path),
    }
}
