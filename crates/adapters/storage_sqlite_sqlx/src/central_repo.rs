//! `SQLite` implementation of [`CentralRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use registry_app::ports::CentralRepository;
use registry_domain::central::{Central, CentralDraft};
use registry_domain::error::{NotFoundError, RegistryError};
use registry_domain::id::CentralId;
use registry_domain::time::{now, parse_rfc3339};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Central`].
struct Wrapper(Central);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        let created_at =
            parse_rfc3339(&created_at).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let updated_at =
            parse_rfc3339(&updated_at).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Central {
            id: CentralId::new(id),
            created_at,
            updated_at,
            name: row.try_get("name")?,
            mac: row.try_get("mac")?,
            ip: row.try_get("ip")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO centrals (created_at, updated_at, name, mac, ip)
    VALUES (?, ?, ?, ?, ?)
    RETURNING *
";
const SELECT_BY_ID: &str = "SELECT * FROM centrals WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM centrals ORDER BY id";
const UPDATE: &str = r"
    UPDATE centrals
    SET updated_at = ?, name = ?, mac = ?, ip = ?
    WHERE id = ?
    RETURNING *
";
const DELETE_BY_ID: &str = "DELETE FROM centrals WHERE id = ?";

fn not_found(id: CentralId) -> RegistryError {
    NotFoundError {
        entity: "Central",
        id: id.to_string(),
    }
    .into()
}

/// `SQLite`-backed central repository.
pub struct SqliteCentralRepository {
    pool: SqlitePool,
}

impl SqliteCentralRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CentralRepository for SqliteCentralRepository {
    fn create(
        &self,
        draft: CentralDraft,
    ) -> impl Future<Output = Result<Central, RegistryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let at = now().to_rfc3339();
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(&at)
                .bind(&at)
                .bind(&draft.name)
                .bind(&draft.mac)
                .bind(&draft.ip)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Central>, RegistryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_by_id(
        &self,
        id: CentralId,
    ) -> impl Future<Output = Result<Central, RegistryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            row.map(|w| w.0).ok_or_else(|| not_found(id))
        }
    }

    fn update(
        &self,
        id: CentralId,
        draft: CentralDraft,
    ) -> impl Future<Output = Result<Central, RegistryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(UPDATE)
                .bind(now().to_rfc3339())
                .bind(&draft.name)
                .bind(&draft.mac)
                .bind(&draft.ip)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            row.map(|w| w.0).ok_or_else(|| not_found(id))
        }
    }

    fn delete(&self, id: CentralId) -> impl Future<Output = Result<(), RegistryError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
