//! Central service — use-cases for managing centrals.
//!
//! The service adds no rules of its own: validation happens at the HTTP edge
//! and uniqueness in the repository. Results and errors are returned exactly
//! as the repository produced them.

use registry_domain::central::{Central, CentralDraft};
use registry_domain::error::RegistryError;
use registry_domain::id::CentralId;

use crate::ports::CentralRepository;

/// Application service for central CRUD operations.
pub struct CentralService<R> {
    repo: R,
}

impl<R: CentralRepository> CentralService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new central.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ConstraintViolation`] on a duplicate `mac` or
    /// `ip`, or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, draft), fields(central_name = %draft.name))]
    pub async fn create_central(&self, draft: CentralDraft) -> Result<Central, RegistryError> {
        self.repo.create(draft).await
    }

    /// List all centrals.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_centrals(&self) -> Result<Vec<Central>, RegistryError> {
        self.repo.get_all().await
    }

    /// Look up a central by id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when no central with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_central(&self, id: CentralId) -> Result<Central, RegistryError> {
        self.repo.get_by_id(id).await
    }

    /// Overwrite an existing central.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] for an unknown `id`,
    /// [`RegistryError::ConstraintViolation`] on a duplicate `mac` or `ip`,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_central(
        &self,
        id: CentralId,
        draft: CentralDraft,
    ) -> Result<Central, RegistryError> {
        self.repo.update(id, draft).await
    }

    /// Delete a central by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_central(&self, id: CentralId) -> Result<(), RegistryError> {
        self.repo.delete(id).await
    }
}
