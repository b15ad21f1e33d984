//! Storage port — persistence gateway for centrals.

use std::future::Future;

use registry_domain::central::{Central, CentralDraft};
use registry_domain::error::RegistryError;
use registry_domain::id::CentralId;

/// Repository for persisting and querying [`Central`]s.
///
/// Implementations own identifier and timestamp assignment and enforce the
/// uniqueness of `mac` and `ip`.
pub trait CentralRepository {
    /// Insert a new central and return it with its id and timestamps set.
    ///
    /// Fails with [`RegistryError::ConstraintViolation`] when `mac` or `ip`
    /// is already taken.
    fn create(
        &self,
        draft: CentralDraft,
    ) -> impl Future<Output = Result<Central, RegistryError>> + Send;

    /// Get all centrals in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Central>, RegistryError>> + Send;

    /// Get a central by id, failing with [`RegistryError::NotFound`] when absent.
    fn get_by_id(
        &self,
        id: CentralId,
    ) -> impl Future<Output = Result<Central, RegistryError>> + Send;

    /// Overwrite the client-owned fields of an existing central.
    ///
    /// Never creates a record: fails with [`RegistryError::NotFound`] when
    /// `id` is unknown, and with [`RegistryError::ConstraintViolation`] when
    /// the new `mac` or `ip` belongs to another central.
    fn update(
        &self,
        id: CentralId,
        draft: CentralDraft,
    ) -> impl Future<Output = Result<Central, RegistryError>> + Send;

    /// Delete a central by id. Deleting an unknown id succeeds.
    fn delete(&self, id: CentralId) -> impl Future<Output = Result<(), RegistryError>> + Send;
}
