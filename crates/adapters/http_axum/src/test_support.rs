//! Stub repository and helpers shared by the handler and router tests.

use std::future::Future;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::response::Response;
use serde_json::Value;

use registry_app::ports::CentralRepository;
use registry_app::services::central_service::CentralService;
use registry_domain::central::{Central, CentralDraft};
use registry_domain::error::{NotFoundError, RegistryError};
use registry_domain::id::CentralId;
use registry_domain::time::now;

use crate::state::AppState;

#[derive(Default)]
struct Inner {
    centrals: Vec<Central>,
    failure: Option<&'static str>,
    calls: Mutex<Vec<&'static str>>,
    seen_ids: Mutex<Vec<CentralId>>,
}

/// Answers from a fixed list of centrals, or fails every call with one
/// storage message. Clones share the call log.
#[derive(Clone, Default)]
pub struct StubRepo(Arc<Inner>);

impl StubRepo {
    pub fn with(centrals: Vec<Central>) -> Self {
        Self(Arc::new(Inner {
            centrals,
            ..Inner::default()
        }))
    }

    pub fn failing(message: &'static str) -> Self {
        Self(Arc::new(Inner {
            failure: Some(message),
            ..Inner::default()
        }))
    }

    pub fn handle(&self) -> Self {
        self.clone()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.0.calls.lock().unwrap().clone()
    }

    pub fn seen_ids(&self) -> Vec<CentralId> {
        self.0.seen_ids.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str, id: Option<CentralId>) -> Result<(), RegistryError> {
        self.0.calls.lock().unwrap().push(call);
        if let Some(id) = id {
            self.0.seen_ids.lock().unwrap().push(id);
        }
        match self.0.failure {
            Some(message) => Err(RegistryError::Storage(message.into())),
            None => Ok(()),
        }
    }

    fn find(&self, id: CentralId) -> Result<Central, RegistryError> {
        self.0
            .centrals
            .iter()
            .find(|central| central.id == id)
            .cloned()
            .ok_or_else(|| {
                NotFoundError {
                    entity: "Central",
                    id: id.to_string(),
                }
                .into()
            })
    }
}

impl CentralRepository for StubRepo {
    fn create(
        &self,
        draft: CentralDraft,
    ) -> impl Future<Output = Result<Central, RegistryError>> + Send {
        let next = self
            .0
            .centrals
            .iter()
            .map(|central| central.id)
            .max()
            .map_or(CentralId::new(1), CentralId::next);
        let result = self
            .record("create", None)
            .map(|()| Central::from_draft(next, draft, now()));
        async { result }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Central>, RegistryError>> + Send {
        let result = self
            .record("get_all", None)
            .map(|()| self.0.centrals.clone());
        async { result }
    }

    fn get_by_id(
        &self,
        id: CentralId,
    ) -> impl Future<Output = Result<Central, RegistryError>> + Send {
        let result = self.record("get_by_id", Some(id)).and_then(|()| self.find(id));
        async { result }
    }

    fn update(
        &self,
        id: CentralId,
        draft: CentralDraft,
    ) -> impl Future<Output = Result<Central, RegistryError>> + Send {
        let result = self
            .record("update", Some(id))
            .and_then(|()| self.find(id))
            .map(|mut central| {
                central.overwrite(draft, now());
                central
            });
        async { result }
    }

    fn delete(&self, id: CentralId) -> impl Future<Output = Result<(), RegistryError>> + Send {
        let result = self.record("delete", Some(id));
        async { result }
    }
}

/// A stored central with a valid MAC/IP pair derived from `id`.
pub fn stored(id: i64, name: &str) -> Central {
    Central::from_draft(
        CentralId::new(id),
        CentralDraft::new(
            name,
            format!("00:11:22:33:44:{id:02x}"),
            format!("192.168.0.{id}"),
        ),
        now(),
    )
}

/// Full router over `repo`, as served by the daemon.
pub fn router(repo: StubRepo) -> Router {
    crate::router::build(AppState::new(CentralService::new(repo)))
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
