//! Error types for manager operations.

use planner_models::ModelError;
use planner_persistence::PersistenceError;
use thiserror::Error;

/// Errors that can occur during manager operations.
///
/// Duplicate and missing identifiers are not errors; they are reported as
/// [`Outcome`](crate::Outcome) values.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Reading or writing a backing store failed.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Attribute text could not be turned into a record or patch.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Failed to render a collection as JSON.
    #[error("failed to serialize: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for manager operations.
pub type Result<T> = std::result::Result<T, CoreError>;
