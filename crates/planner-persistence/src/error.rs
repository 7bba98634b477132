//! Error types for persistence operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during persistence operations.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Failed to read from file system.
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write to file system.
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize data to JSON.
    #[error("failed to serialize: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to create directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A non-empty store could not be parsed as the expected collection.
    #[error("store {path} is unreadable: {source}")]
    StoreUnreadable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The store parsed but its contents break a collection invariant.
    #[error("invalid data in {path}: {reason}")]
    InvalidData { path: PathBuf, reason: String },
}

impl PersistenceError {
    /// Returns true for errors raised while loading an existing store.
    pub fn is_unreadable_store(&self) -> bool {
        matches!(
            self,
            PersistenceError::StoreUnreadable { .. } | PersistenceError::InvalidData { .. }
        )
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
