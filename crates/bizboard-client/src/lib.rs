//! # bizboard-client
//!
//! Rust client library for the Bizboard backend.
//!
//! This crate provides:
//! - [`ApiClient`]: async HTTP client bound to one backend and credential source
//! - [`ResourceClient`]: list/get/create/update/delete for any [`Resource`]
//! - Per-resource modules with custom actions (submit, approve, rotate, ...)
//! - [`CredentialProvider`] / [`AuthFailureHandler`] seams for bearer tokens
//! - [`ClientConfig`] loading from TOML and the environment
//!
//! ```no_run
//! use bizboard_client::{ApiClient, ClientConfig};
//! use bizboard_core::ListQuery;
//!
//! # async fn run() -> bizboard_core::Result<()> {
//! let client = ApiClient::new(&ClientConfig::default())?;
//! let companies = client.companies().list(&ListQuery::new()).await?;
//! println!("{} companies", companies.len());
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod credentials;
pub mod resource;
pub mod resources;

pub use client::{ApiClient, ApiClientBuilder};
pub use config::ClientConfig;
pub use credentials::{
    AuthFailureHandler, CredentialProvider, LogAuthFailure, NoCredentials, StaticToken, TokenFile,
};
pub use resource::{Resource, ResourceClient, UpdateMethod};

pub use bizboard_core::{Error, Result};
