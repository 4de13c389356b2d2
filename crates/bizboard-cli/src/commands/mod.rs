//! Subcommand implementations.

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod list;
pub mod notifications;
