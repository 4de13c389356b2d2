//! Bizboard Core — shared types, errors, and backend records.
//!
//! This crate provides the foundational types used across all Bizboard crates.
//! It has no internal Bizboard dependencies and performs no network I/O.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`envelope`]: Normalization of `{ success, data }` response envelopes
//! - [`id`]: Backend record identifiers
//! - [`query`]: Pagination and filter parameters for list requests
//! - [`models`]: Typed mirrors of the backend's JSON records

#![warn(clippy::all)]

pub mod envelope;
pub mod error;
pub mod id;
pub mod models;
pub mod query;

// Re-export key types at crate root for convenience
pub use envelope::{is_envelope, unwrap_envelope};
pub use error::{Error, Result};
pub use id::RecordId;
pub use query::ListQuery;
