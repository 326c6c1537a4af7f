// Error types for the gtasks CLI.
// Covers Google Tasks API errors, cache errors, and general application errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GtasksError {
    #[error("Google Tasks API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Authentication failed: invalid or expired token")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Missing GTASKS_TOKEN environment variable")]
    MissingToken,

    #[error("failed to load cache file {}: {reason} (delete it to rebuild the cache)", .path.display())]
    CacheParse { path: PathBuf, reason: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no task list found with title '{0}'")]
    TasklistNotFound(String),

    #[error(
        "no task list specified and no default is configured; \
         run `gtasks set-default` or pass --tasklist-id/--tasklist-title"
    )]
    NoDefaultTasklist,

    #[error("invalid due date '{0}': expected an RFC 3339 timestamp")]
    InvalidDueDate(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, GtasksError>;
