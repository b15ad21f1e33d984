//! # registry-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **persistence gateway** adapters must implement
//!   (`CentralRepository` — create, list, get, overwrite, delete)
//! - Define the **driving port** as a use-case struct (`CentralService`)
//!   that the HTTP adapter calls into
//! - Keep the HTTP layer independent of the storage technology
//!
//! ## Dependency rule
//! Depends on `registry-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
