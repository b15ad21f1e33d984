//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod centrals;

use axum::Router;
use axum::routing::{get, post};

use registry_app::ports::CentralRepository;

use crate::state::AppState;

/// Build the API sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: CentralRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/central", post(centrals::create::<R>))
        .route("/centrals", get(centrals::list::<R>))
        .route(
            "/central/{id}",
            get(centrals::get::<R>)
                .put(centrals::update::<R>)
                .delete(centrals::delete::<R>),
        )
}
