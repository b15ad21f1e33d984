//! Connection pool for the `centrals` table.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::StorageError;

/// An open, migrated `SQLite` database.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open `url` (e.g. `sqlite:registry.db?mode=rwc` or `sqlite::memory:`),
    /// creating the file when missing, and bring the schema up to date.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the URL is invalid, the connection fails,
    /// or a migration cannot be applied.
    pub async fn connect(url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let db = Self {
            pool: SqlitePool::connect_with(options).await?,
        };
        db.migrate().await?;
        Ok(db)
    }

    /// Apply pending embedded migrations. Already-applied ones are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Migration`] when a migration fails.
    pub async fn migrate(&self) -> Result<(), StorageError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Hand the pool over to a repository.
    #[must_use]
    pub fn into_pool(self) -> SqlitePool {
        self.pool
    }
}
