//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Print the ASCII banner before the greeting
    #[serde(default = "default_true")]
    pub show_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { show_banner: true }
    }
}

fn default_true() -> bool {
    true
}

fn config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("could not determine the config directory")?;
    Ok(dir.join("lumen").join("config.toml"))
}

impl Config {
    /// Load the config file, falling back to defaults when it is missing.
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}
