//! # registry-adapter-storage-memory
//!
//! Volatile implementation of the `CentralRepository` port.
//!
//! Useful for demos and for running the daemon without a database file.
//! Identifiers are assigned sequentially from 1, listing follows id order, and
//! `mac`/`ip` uniqueness is enforced on create and update. Everything is lost
//! when the process exits.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use registry_app::ports::CentralRepository;
use registry_domain::central::{Central, CentralDraft};
use registry_domain::error::{NotFoundError, RegistryError};
use registry_domain::id::CentralId;
use registry_domain::time::now;

#[derive(Default)]
struct Store {
    last_id: i64,
    centrals: BTreeMap<CentralId, Central>,
}

impl Store {
    /// Name the column `draft` would collide on, ignoring the row `except`.
    fn conflict(&self, draft: &CentralDraft, except: Option<CentralId>) -> Option<&'static str> {
        let others = || {
            self.centrals
                .values()
                .filter(move |central| Some(central.id) != except)
        };
        if others().any(|central| central.mac == draft.mac) {
            Some("mac")
        } else if others().any(|central| central.ip == draft.ip) {
            Some("ip")
        } else {
            None
        }
    }
}

fn constraint_violation(column: &str) -> RegistryError {
    RegistryError::ConstraintViolation(format!("UNIQUE constraint failed: centrals.{column}"))
}

fn not_found(id: CentralId) -> RegistryError {
    NotFoundError {
        entity: "Central",
        id: id.to_string(),
    }
    .into()
}

/// In-memory central repository.
#[derive(Default)]
pub struct InMemoryCentralRepository {
    store: Mutex<Store>,
}

impl InMemoryCentralRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn insert(&self, draft: CentralDraft) -> Result<Central, RegistryError> {
        let mut store = self.lock();
        if let Some(column) = store.conflict(&draft, None) {
            return Err(constraint_violation(column));
        }
        let id = CentralId::new(store.last_id).next();
        store.last_id = id.get();
        let central = Central::from_draft(id, draft, now());
        store.centrals.insert(id, central.clone());
        Ok(central)
    }

    fn overwrite(&self, id: CentralId, draft: CentralDraft) -> Result<Central, RegistryError> {
        let mut store = self.lock();
        if !store.centrals.contains_key(&id) {
            return Err(not_found(id));
        }
        if let Some(column) = store.conflict(&draft, Some(id)) {
            return Err(constraint_violation(column));
        }
        let central = store.centrals.get_mut(&id).ok_or_else(|| not_found(id))?;
        central.overwrite(draft, now());
        Ok(central.clone())
    }
}

impl CentralRepository for InMemoryCentralRepository {
    fn create(
        &self,
        draft: CentralDraft,
    ) -> impl Future<Output = Result<Central, RegistryError>> + Send {
        let result = self.insert(draft);
        async { result }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Central>, RegistryError>> + Send {
        let result: Vec<Central> = self.lock().centrals.values().cloned().collect();
        async { Ok(result) }
    }

    fn get_by_id(
        &self,
        id: CentralId,
    ) -> impl Future<Output = Result<Central, RegistryError>> + Send {
        let result = self.lock().centrals.get(&id).cloned().ok_or_else(|| not_found(id));
        async { result }
    }

    fn update(
        &self,
        id: CentralId,
        draft: CentralDraft,
    ) -> impl Future<Output = Result<Central, RegistryError>> + Send {
        let result = self.overwrite(id, draft);
        async { result }
    }

    fn delete(&self, id: CentralId) -> impl Future<Output = Result<(), RegistryError>> + Send {
        self.lock().centrals.remove(&id);
        async { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(n: u8) -> CentralDraft {
        CentralDraft::new(
            format!("Central {n}"),
            format!("00:11:22:33:44:{n:02x}"),
            format!("192.168.0.{n}"),
        )
    }

    #[tokio::test]
    async fn should_assign_sequential_ids_from_one() {
        let repo = InMemoryCentralRepository::new();
        let first = repo.create(draft(1)).await.unwrap();
        let second = repo.create(draft(2)).await.unwrap();
        assert_eq!(first.id, CentralId::new(1));
        assert_eq!(second.id, CentralId::new(2));
    }

    #[tokio::test]
    async fn should_not_reuse_id_after_delete() {
        let repo = InMemoryCentralRepository::new();
        let first = repo.create(draft(1)).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(draft(1)).await.unwrap();
        assert_eq!(second.id, CentralId::new(2));
    }

    #[tokio::test]
    async fn should_list_in_insertion_order() {
        let repo = InMemoryCentralRepository::new();
        for n in 1..=3 {
            repo.create(draft(n)).await.unwrap();
        }
        let names: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Central 1", "Central 2", "Central 3"]);
    }

    #[tokio::test]
    async fn should_reject_duplicate_mac_and_ip() {
        let repo = InMemoryCentralRepository::new();
        repo.create(draft(1)).await.unwrap();

        let mut same_mac = draft(2);
        same_mac.mac = draft(1).mac;
        let err = repo.create(same_mac).await.unwrap_err();
        assert_eq!(err.to_string(), "UNIQUE constraint failed: centrals.mac");

        let mut same_ip = draft(2);
        same_ip.ip = draft(1).ip;
        let err = repo.create(same_ip).await.unwrap_err();
        assert_eq!(err.to_string(), "UNIQUE constraint failed: centrals.ip");

        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_allow_update_keeping_own_mac_and_ip() {
        let repo = InMemoryCentralRepository::new();
        let created = repo.create(draft(1)).await.unwrap();

        let mut renamed = draft(1);
        renamed.name = "Renamed".to_string();
        let updated = repo.update(created.id, renamed).await.unwrap();

        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn should_fail_update_for_unknown_id_without_creating() {
        let repo = InMemoryCentralRepository::new();
        let result = repo.update(CentralId::new(5), draft(1)).await;
        assert!(matches!(result, Err(RegistryError::NotFound(_))));
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_after_delete_and_tolerate_second_delete() {
        let repo = InMemoryCentralRepository::new();
        let created = repo.create(draft(1)).await.unwrap();

        repo.delete(created.id).await.unwrap();
        repo.delete(created.id).await.unwrap();

        assert!(matches!(
            repo.get_by_id(created.id).await,
            Err(RegistryError::NotFound(_))
        ));
    }
}
