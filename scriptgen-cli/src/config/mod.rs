//! Configuration
//!
//! Resolution order, later wins:
//! 1. Built-in defaults
//! 2. `~/.config/scriptgen/config.toml`
//! 3. Environment (`SCRIPTGEN_BATCH_SIZE`, `SCRIPTGEN_OUTPUT_DIR`, `.env` honoured)
//! 4. Command-line flags (applied by the command handlers)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::extract::DEFAULT_BATCH_SIZE;

pub const BATCH_SIZE_ENV: &str = "SCRIPTGEN_BATCH_SIZE";
pub const OUTPUT_DIR_ENV: &str = "SCRIPTGEN_OUTPUT_DIR";

/// Effective settings for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Activity numbers per rendered list row
    pub batch_size: usize,
    /// Where saved scripts go (current directory when unset)
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            output_dir: None,
        }
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("scriptgen")
            .join("config.toml")
    }

    /// Load from the default path and the environment
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        let mut config = Self::load_file(&Self::default_path())?;
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config file, falling back to defaults when it does not exist
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(BATCH_SIZE_ENV) {
            self.batch_size = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be a positive integer, got '{}'", BATCH_SIZE_ENV, raw))?;
        }

        if let Some(raw) = lookup(OUTPUT_DIR_ENV) {
            let raw = raw.trim();
            if !raw.is_empty() {
                self.output_dir = Some(PathBuf::from(raw));
            }
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            bail!("batch_size must be a positive integer");
        }
        Ok(())
    }

    /// Directory saved scripts are written to
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
