//! # registry-domain
//!
//! Pure domain model for the central registry.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **Central** record (a network controller identified by name,
//!   MAC address and IPv4 address)
//! - Define the declarative **validation schema** for client-supplied fields
//!   and the formatter that turns field failures into one message
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod central;
pub mod validation;
