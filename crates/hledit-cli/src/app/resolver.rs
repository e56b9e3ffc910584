//! Path resolution for the config file and store directory.

use std::path::PathBuf;

use tracing::debug;

use crate::cli::Cli;
use crate::config::{default_config_path, default_store_path, read_config, HleditConfig};

/// Resolve the config file path, checking HLEDIT_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("HLEDIT_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file, or defaults when it does not exist.
pub fn load_config() -> anyhow::Result<HleditConfig> {
    let path = resolve_config_path()?;
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(HleditConfig::default());
    }
    debug!(path = %path.display(), "reading config");
    read_config(&path)
}

/// Resolve the store directory from CLI args, then config, then XDG data dir.
pub fn resolve_store_path(cli: &Cli, config: &HleditConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.store.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config.store.path.as_deref() {
        return Ok(PathBuf::from(path));
    }
    default_store_path()
}
