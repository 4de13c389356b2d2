//! # bizboard-cli
//!
//! Command implementations behind the `bizboard` binary:
//! - `dashboard`: load widgets and render them as text or JSON
//! - `list`: dump any resource as JSON
//! - `notifications`: watch the unread feed
//! - `login` / `logout`: manage the stored token
//! - `config`: inspect or create the config file

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod render;

use std::sync::Arc;

use anyhow::{Context, Result};

use bizboard_client::{ApiClient, ClientConfig, LogAuthFailure, StaticToken, TokenFile};

use crate::cli::{Cli, Command};

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Command::Config { action } => commands::config::handle(cli.config.as_deref(), action),
        Command::Login { token } => {
            let config = load_config(&cli)?;
            commands::auth::login(&config, token)
        }
        Command::Logout => {
            let config = load_config(&cli)?;
            commands::auth::logout(&config)
        }
        Command::Dashboard { widgets, json } => {
            let client = build_client(&cli)?;
            commands::dashboard::run(client, widgets, *json).await
        }
        Command::List {
            resource,
            skip,
            limit,
            filters,
        } => {
            let client = build_client(&cli)?;
            let query = commands::list::query(*skip, *limit, filters)?;
            commands::list::run(&client, resource, &query).await
        }
        Command::Notifications { interval, once } => {
            let client = build_client(&cli)?;
            commands::notifications::run(client, *interval, *once).await
        }
    }
}

/// Config file plus environment, then `--api-url`.
pub fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config =
        ClientConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(url) = &cli.api_url {
        config.base_url = url.clone();
        config.validate()?;
    }
    Ok(config)
}

/// Client authenticated with `--token`/`BIZBOARD_TOKEN` if given, otherwise
/// with the stored token file.
pub fn build_client(cli: &Cli) -> Result<ApiClient> {
    let config = load_config(cli)?;
    let builder = ApiClient::builder(config.clone());

    let builder = match (&cli.token, config.token_path()) {
        (Some(token), _) => builder
            .credentials(Arc::new(StaticToken::new(token.clone())))
            .on_auth_failure(Arc::new(LogAuthFailure)),
        (None, Some(path)) => {
            let file = Arc::new(TokenFile::new(path));
            builder
                .credentials(Arc::clone(&file) as _)
                .on_auth_failure(file)
        }
        (None, None) => builder,
    };

    builder.build().context("Failed to create API client")
}
