//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use registry_domain::error::{NotFoundError, RegistryError};
use registry_domain::id::CentralId;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`RegistryError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(RegistryError);

impl ApiError {
    /// The fixed response for a central that cannot be served.
    #[must_use]
    pub fn central_not_found(id: CentralId) -> Self {
        Self(
            NotFoundError {
                entity: "Central",
                id: id.to_string(),
            }
            .into(),
        )
    }

    /// A path segment that is not a central id.
    #[must_use]
    pub fn invalid_id(raw: &str) -> Self {
        Self(RegistryError::MalformedInput(format!(
            "invalid central id: {raw}"
        )))
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            RegistryError::MalformedInput(message) | RegistryError::Invalid(message) => {
                (StatusCode::BAD_REQUEST, message)
            }
            RegistryError::Validation(errors) => (StatusCode::BAD_REQUEST, errors.to_string()),
            RegistryError::NotFound(err) => {
                (StatusCode::NOT_FOUND, format!("{} not found", err.entity))
            }
            RegistryError::ConstraintViolation(message) => {
                tracing::warn!(error = %message, "constraint violation");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            RegistryError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
