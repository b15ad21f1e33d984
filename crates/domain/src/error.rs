//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RegistryError`] via `From`. Only the HTTP adapter decides which status
//! code a variant maps to.

use crate::validation::ValidationErrors;

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The request body could not be parsed.
    #[error("{0}")]
    MalformedInput(String),

    /// One or more fields broke the validation schema.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// A validation failure already rendered to its final message.
    #[error("{0}")]
    Invalid(String),

    /// No record exists for the requested identifier.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A uniqueness rule of the store was breached.
    #[error("{0}")]
    ConstraintViolation(String),

    /// Any other failure reported by a storage backend.
    #[error("{0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// The requested record does not exist.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// Kind of record that was looked up (e.g. `"Central"`).
    pub entity: &'static str,
    /// Identifier that was looked up, rendered as text.
    pub id: String,
}
