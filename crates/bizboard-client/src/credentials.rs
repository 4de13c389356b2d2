//! Credential providers and the authentication-failure hook.
//!
//! The client never reads ambient state for credentials: a
//! [`CredentialProvider`] is injected at construction and asked for a bearer
//! token on every request. When the backend answers 401 the injected
//! [`AuthFailureHandler`] runs before `Error::Unauthorized` is returned.

use std::fs;
use std::path::{Path, PathBuf};

use bizboard_core::{Error, Result};

/// Source of the bearer token attached to each request.
pub trait CredentialProvider: Send + Sync + 'static {
    /// The current token, or `None` to send the request unauthenticated.
    fn bearer_token(&self) -> Option<String>;
}

/// Hook invoked when the backend rejects the credentials.
///
/// This is where an interactive front end sends the user back to login.
pub trait AuthFailureHandler: Send + Sync + 'static {
    /// Called once per 401 response.
    fn on_unauthorized(&self);
}

/// Sends every request without an `Authorization` header.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

/// A fixed token, e.g. from `BIZBOARD_TOKEN`.
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    /// Wrap a token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("StaticToken").field(&"<redacted>").finish()
    }
}

impl CredentialProvider for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.clone())
        }
    }
}

/// Token persisted in a file, re-read on every request.
///
/// A missing or blank file means "not logged in". On a 401 the stored token
/// is cleared so the next run asks for a fresh login.
#[derive(Debug, Clone)]
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    /// Use the token stored at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/bizboard/token`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bizboard").join("token"))
    }

    /// Where the token lives.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `token`, creating parent directories as needed.
    pub fn store(&self, token: &str) -> Result<()> {
        if token.trim().is_empty() {
            return Err(Error::config("refusing to store an empty token"));
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token.trim())?;
        tracing::debug!(path = %self.path.display(), "Stored API token");
        Ok(())
    }

    /// Remove the stored token. Succeeds if there was none.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl CredentialProvider for TokenFile {
    fn bearer_token(&self) -> Option<String> {
        let token = fs::read_to_string(&self.path).ok()?;
        let token = token.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }
}

impl AuthFailureHandler for TokenFile {
    fn on_unauthorized(&self) {
        tracing::warn!(
            path = %self.path.display(),
            "Backend rejected the stored token; clearing it, login required"
        );
        if let Err(e) = self.clear() {
            tracing::warn!("Failed to clear stored token: {e}");
        }
    }
}

/// Default hook: log and leave everything as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAuthFailure;

impl AuthFailureHandler for LogAuthFailure {
    fn on_unauthorized(&self) {
        tracing::warn!("Backend rejected the credentials; login required");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_no_credentials() {
        assert_eq!(NoCredentials.bearer_token(), None);
    }

    #[test]
    fn test_static_token() {
        assert_eq!(StaticToken::new("abc").bearer_token(), Some("abc".into()));
        assert_eq!(StaticToken::new("").bearer_token(), None);
    }

    #[test]
    fn test_static_token_debug_redacts() {
        let debug = format!("{:?}", StaticToken::new("super-secret"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_token_file_store_read_clear() {
        let dir = tempfile::tempdir().unwrap();
        let file = TokenFile::new(dir.path().join("nested").join("token"));

        assert_eq!(file.bearer_token(), None);

        file.store("  tok-123\n").unwrap();
        assert_eq!(file.bearer_token(), Some("tok-123".into()));

        file.clear().unwrap();
        assert_eq!(file.bearer_token(), None);
        // Clearing twice is fine
        file.clear().unwrap();
    }

    #[test]
    fn test_token_file_rejects_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = TokenFile::new(dir.path().join("token"));
        assert!(file.store("   ").is_err());
    }

    #[test]
    fn test_token_file_clears_on_unauthorized() {
        let dir = tempfile::tempdir().unwrap();
        let file = TokenFile::new(dir.path().join("token"));
        file.store("expired").unwrap();

        file.on_unauthorized();
        assert_eq!(file.bearer_token(), None);
    }
}
