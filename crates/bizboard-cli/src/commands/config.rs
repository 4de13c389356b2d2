//! `bizboard config path|show|init`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use bizboard_client::ClientConfig;

use crate::cli::ConfigAction;

pub fn handle(config_path: Option<&str>, action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => {
            let path = resolve(config_path)?;
            println!("{}", path.display());
            if !path.exists() {
                eprintln!("(file does not exist; run `bizboard config init` to create it)");
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = ClientConfig::load(config_path)?;
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
        ConfigAction::Init { force } => {
            let path = resolve(config_path)?;
            init(&path, *force)?;
            println!("Config file created at {}", path.display());
            Ok(())
        }
    }
}

fn resolve(config_path: Option<&str>) -> Result<PathBuf> {
    ClientConfig::resolve_config_path(config_path)
        .context("Could not determine config directory for this platform")
}

/// Write the default configuration to `path`.
pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let content = ClientConfig::default().to_toml_string()?;
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Wrote default config");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        init(&path, false).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(ClientConfig::from_toml_str(&content).unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = \"https://erp.example.com\"\n").unwrap();

        let err = init(&path, false).unwrap_err();
        assert!(err.to_string().contains("--force"));

        init(&path, true).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("localhost:8000"));
    }
}
