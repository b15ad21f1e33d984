//! Shared application state for axum handlers.

use std::sync::Arc;

use registry_app::ports::CentralRepository;
use registry_app::services::central_service::CentralService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Central CRUD service.
    pub central_service: Arc<CentralService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            central_service: Arc::clone(&self.central_service),
        }
    }
}

impl<R> AppState<R>
where
    R: CentralRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(central_service: CentralService<R>) -> Self {
        Self {
            central_service: Arc::new(central_service),
        }
    }
}
