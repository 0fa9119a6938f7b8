//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use mandate_extractor::PipelineConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Extraction pipeline settings
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Config {
    /// Get the home configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".mandate").join("config.toml"))
    }

    /// Load configuration, trying an explicit path, then `mandate.toml` in
    /// the working directory, then the home configuration file.
    ///
    /// An explicit path must exist; the fallbacks are optional, and when
    /// none is present the defaults apply. A `[pipeline]` table, if given,
    /// must be complete and pass validation.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(CliError::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            return Self::read(path);
        }

        let local = Path::new("mandate.toml");
        if local.exists() {
            return Self::read(local);
        }

        let path = Self::path()?;
        if path.exists() {
            return Self::read(&path);
        }

        Ok(Self::default())
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config
            .pipeline
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;
        Ok(config)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self { color: true }
    }
}

fn default_true() -> bool {
    true
}
