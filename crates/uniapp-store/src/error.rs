// ABOUTME: Error type shared by the record store and its snapshot codec.
// ABOUTME: Separates unreadable-content failures from plain I/O failures.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or persisting student records.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backing file exists but does not decode as a student list.
    #[error("corrupt record file {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::Corrupt { .. })
    }
}
