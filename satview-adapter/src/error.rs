//! Error types for the catalog glue.

use std::io;

use satview::WindowError;

/// Why the catalog could not be loaded.
///
/// The `Display` output is the message shown to the user as-is.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Non-success HTTP status from the catalog API.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// The API answered with an error envelope.
    #[error("{message}")]
    Api {
        status: Option<u16>,
        message: String,
    },

    /// The payload was not valid catalog JSON.
    #[error("invalid catalog payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// The shell's transport failed before a response arrived.
    #[error("{0}")]
    Transport(String),
}

impl CatalogError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }
}

/// Errors from a [`crate::StorageBackend`].
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("storage file is not a JSON object: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors while loading or validating a [`crate::BrowserConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid list geometry: {0}")]
    Geometry(#[from] WindowError),

    #[error("invalid API base URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("selection limit must be greater than zero")]
    ZeroSelectionLimit,

    #[error("no comparator for default sort field `{0}`")]
    UnknownSortField(String),
}
