//! Persistence error types.

use std::path::PathBuf;

/// Errors from reading or writing the routes file.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Reading the routes file failed
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the routes file failed
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a JSON array of route records
    #[error("invalid routes JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A single record cannot become a route
    #[error("invalid route record: {0}")]
    InvalidRecord(String),
}
