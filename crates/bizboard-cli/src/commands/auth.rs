//! `bizboard login` / `bizboard logout`.

use anyhow::{Context, Result};

use bizboard_client::{ClientConfig, TokenFile};

fn token_file(config: &ClientConfig) -> Result<TokenFile> {
    let path = config
        .token_path()
        .context("Could not determine where to store the token")?;
    Ok(TokenFile::new(path))
}

/// Store `token` for later commands.
pub fn login(config: &ClientConfig, token: &str) -> Result<()> {
    let file = token_file(config)?;
    file.store(token)?;
    println!("Token stored at {}", file.path().display());
    Ok(())
}

/// Forget the stored token.
pub fn logout(config: &ClientConfig) -> Result<()> {
    let file = token_file(config)?;
    file.clear()?;
    println!("Logged out");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use bizboard_client::CredentialProvider;

    #[test]
    fn test_login_then_logout() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ClientConfig::default();
        config.token_file = Some(dir.path().join("token"));

        login(&config, "tok-9").unwrap();
        let file = token_file(&config).unwrap();
        assert_eq!(file.bearer_token(), Some("tok-9".into()));

        logout(&config).unwrap();
        assert_eq!(file.bearer_token(), None);
    }

    #[test]
    fn test_login_rejects_blank_token() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ClientConfig::default();
        config.token_file = Some(dir.path().join("token"));
        assert!(login(&config, "  ").is_err());
    }
}
