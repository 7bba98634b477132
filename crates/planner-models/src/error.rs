//! Error types for record construction from operator text.

use thiserror::Error;

use crate::kind::EntityKind;

/// Errors raised while turning attribute text into records or patches.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The entity kind name is not one of the six known kinds.
    #[error("unknown entity kind: {0}")]
    UnknownKind(String),

    /// The attribute does not belong to the entity kind.
    #[error("{kind} has no attribute named '{name}'")]
    UnknownAttribute { kind: EntityKind, name: String },

    /// A required attribute was not supplied.
    #[error("missing {kind} attribute '{name}'")]
    MissingAttribute { kind: EntityKind, name: String },

    /// The attribute cannot be changed after creation.
    #[error("{kind} attribute '{name}' cannot be modified")]
    ImmutableAttribute { kind: EntityKind, name: String },

    /// The value could not be parsed for the attribute's type.
    #[error("invalid value '{value}' for '{name}': {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
