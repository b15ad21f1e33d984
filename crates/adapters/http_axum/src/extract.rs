//! Request extractors.

use axum::Json;
use axum::extract::{FromRequest, Request};

use registry_domain::central::CentralDraft;
use registry_domain::error::RegistryError;
use registry_domain::validation::format_validation_errors;

use crate::error::ApiError;

/// A JSON [`CentralDraft`] body that parsed and passed validation.
///
/// Drop-in replacement for `Json<CentralDraft>`. Any parser rejection
/// (syntax, wrong field type, missing JSON content type) becomes a `400`
/// carrying the parser's message; validation failures become a `400` with the
/// formatted list of failing fields.
pub struct ValidDraft(pub CentralDraft);

impl<S> FromRequest<S> for ValidDraft
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(draft) = Json::<CentralDraft>::from_request(req, state)
            .await
            .map_err(|rejection| RegistryError::MalformedInput(rejection.body_text()))?;

        if let Some(err) = format_validation_errors(draft.validate().err()) {
            return Err(err.into());
        }

        Ok(Self(draft))
    }
}
