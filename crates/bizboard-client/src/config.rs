//! Client configuration.
//!
//! Resolution order: built-in defaults, then the TOML file (explicit path or
//! `<config dir>/bizboard/config.toml`), then environment overrides.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use bizboard_core::{Error, Result};

/// Environment variable selecting the backend host.
pub const BASE_URL_ENV: &str = "BIZBOARD_API_URL";

/// Environment variable overriding the versioned API prefix.
pub const API_PREFIX_ENV: &str = "BIZBOARD_API_PREFIX";

/// Settings for [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend origin, e.g. `https://erp.example.com`
    pub base_url: String,
    /// Versioned prefix every resource path lives under
    pub api_prefix: String,
    /// Request timeout; `None` keeps the HTTP client's default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Token file location; `None` uses [`TokenFile::default_path`](crate::TokenFile::default_path)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_file: Option<PathBuf>,
    /// `User-Agent` header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            api_prefix: "/api/v1".to_string(),
            timeout_secs: None,
            token_file: None,
            user_agent: format!("bizboard/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Defaults pointed at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// `<config dir>/bizboard/config.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bizboard").join("config.toml"))
    }

    /// The explicit path if given, otherwise the default location.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Load configuration and apply environment overrides.
    ///
    /// An explicit path must exist; a missing default file just means
    /// defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let mut config = match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)?;
                tracing::debug!(path = %path.display(), "Loaded config file");
                Self::from_toml_str(&content)?
            }
            Some(path) if explicit.is_some() => {
                return Err(Error::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            _ => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Invalid config: {e}")))
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Apply environment-style overrides from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        if let Some(prefix) = lookup(API_PREFIX_ENV).filter(|v| !v.trim().is_empty()) {
            self.api_prefix = prefix.trim().to_string();
        }
    }

    /// Reject settings the client cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::config("base_url must not be empty"));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(Error::config(format!(
                "base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_secs == Some(0) {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// Prefix split into path segments, e.g. `["api", "v1"]`.
    pub fn prefix_segments(&self) -> Vec<String> {
        self.api_prefix
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Configured token file, or the default location.
    pub fn token_path(&self) -> Option<PathBuf> {
        self.token_file
            .clone()
            .or_else(crate::TokenFile::default_path)
    }
}
