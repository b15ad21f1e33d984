//! Storage-specific error type wrapping sqlx errors.

use registry_domain::error::RegistryError;

/// Errors originating from the `SQLite` storage layer.
///
/// Messages are the driver's own so callers can surface them verbatim.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for RegistryError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Database(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Self::ConstraintViolation(db.message().to_string())
            }
            other => Self::Storage(Box::new(other)),
        }
    }
}
