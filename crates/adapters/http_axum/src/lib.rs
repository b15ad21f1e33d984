//! # registry-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API (`/central`, `/centrals`, `/central/{id}`)
//! - Parse request bodies and reject malformed JSON
//! - Validate client-supplied fields before any service call
//! - Map application results and errors into HTTP status codes and
//!   `{"error": "..."}` bodies — the only layer that does so
//!
//! ## Dependency rule
//! Depends on `registry-app` (for port traits and services) and `registry-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;
