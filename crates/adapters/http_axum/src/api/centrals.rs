//! JSON REST handlers for centrals.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use registry_app::ports::CentralRepository;
use registry_domain::central::Central;
use registry_domain::id::CentralId;

use crate::error::ApiError;
use crate::extract::ValidDraft;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Central>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Central>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Central>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_id(raw: &str) -> Result<CentralId, ApiError> {
    raw.parse().map_err(|_| ApiError::invalid_id(raw))
}

/// `POST /central`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    ValidDraft(draft): ValidDraft,
) -> Result<CreateResponse, ApiError>
where
    R: CentralRepository + Send + Sync + 'static,
{
    let created = state.central_service.create_central(draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `GET /centrals`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: CentralRepository + Send + Sync + 'static,
{
    let centrals = state.central_service.list_centrals().await?;
    Ok(ListResponse::Ok(Json(centrals)))
}

/// `GET /central/{id}`
///
/// Every lookup failure, storage errors included, is reported as not found.
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: CentralRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let central = state
        .central_service
        .get_central(id)
        .await
        .map_err(|err| {
            tracing::debug!(error = %err, %id, "central lookup failed");
            ApiError::central_not_found(id)
        })?;
    Ok(GetResponse::Ok(Json(central)))
}

/// `PUT /central/{id}`
///
/// The id always comes from the path; an `id` in the body is ignored.
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    ValidDraft(draft): ValidDraft,
) -> Result<GetResponse, ApiError>
where
    R: CentralRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let updated = state.central_service.update_central(id, draft).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /central/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: CentralRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    state.central_service.delete_central(id).await?;
    Ok(DeleteResponse::NoContent)
}
