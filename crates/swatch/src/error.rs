//! Errors raised by style sinks and theme stores.

use std::path::PathBuf;

/// Error returned when writing a theme or reading/writing its persisted state fails.
///
/// Unknown theme identifiers are never reported here; they fall back to the
/// default theme.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The style target rejected a property write.
    #[error("failed to set style property '{property}': {message}")]
    Style { property: String, message: String },

    /// The key-value store rejected a read or a write.
    #[error("theme storage failed for key '{key}': {message}")]
    Storage { key: String, message: String },

    /// A platform facility (document, storage) is not available.
    #[error("{0} is not available")]
    Unavailable(&'static str),

    /// Reading or writing a state file failed.
    #[error("cannot access state file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A state file exists but is not a JSON object of strings.
    #[error("state file {path} is malformed: {source}")]
    StateFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}
