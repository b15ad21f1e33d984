//! # registry-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `registry-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows, and `UNIQUE` failures
//!   into constraint violations
//!
//! ## Dependency rule
//! Depends on `registry-app` (for port traits) and `registry-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod central_repo;
mod error;
mod pool;

pub use central_repo::SqliteCentralRepository;
pub use error::StorageError;
pub use pool::Database;
