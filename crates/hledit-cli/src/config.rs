use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use hledit_core::sync::{DEFAULT_AMOUNT_COLUMN, DEFAULT_MIN_GAP};
use hledit_core::RewriteOptions;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HleditConfig {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub format: FormatSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreSection {
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FormatSection {
    #[serde(default = "default_amount_column")]
    pub amount_column: usize,
    #[serde(default = "default_min_gap")]
    pub min_gap: usize,
}

impl Default for FormatSection {
    fn default() -> Self {
        Self {
            amount_column: DEFAULT_AMOUNT_COLUMN,
            min_gap: DEFAULT_MIN_GAP,
        }
    }
}

fn default_amount_column() -> usize {
    DEFAULT_AMOUNT_COLUMN
}

fn default_min_gap() -> usize {
    DEFAULT_MIN_GAP
}

impl HleditConfig {
    pub fn rewrite_options(&self) -> RewriteOptions {
        RewriteOptions::new(self.format.amount_column, self.format.min_gap)
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_store_path() -> anyhow::Result<PathBuf> {
    xdg_data_dir()
}

pub fn read_config(path: &Path) -> anyhow::Result<HleditConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("hledit"));
        }
    }
    Ok(home_dir()?.join(".config").join("hledit"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("hledit"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("hledit"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
