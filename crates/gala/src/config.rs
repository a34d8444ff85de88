//! Configuration management for gala.
//!
//! Configuration is loaded with figment from defaults, an optional TOML
//! file, and `GALA_`-prefixed environment variables.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "gala";

/// Default journal file name, relative to the working directory.
const JOURNAL_FILE_NAME: &str = "system.log";

/// Application configuration.
///
/// Loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `GALA_`)
/// 2. TOML config file at `~/.config/gala/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Operations journal configuration.
    pub journal: JournalConfig,
}

/// Journal-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    /// Path to the journal file.
    /// Defaults to `system.log` in the working directory.
    /// Overridable via `GALA_JOURNAL_FILE`.
    pub file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("GALA_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.journal.file {
            if path.as_os_str().is_empty() {
                return Err(Error::ConfigValidation {
                    message: "journal.file must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Get the journal path, resolving the default if not set.
    #[must_use]
    pub fn journal_path(&self) -> PathBuf {
        self.journal
            .file
            .clone()
            .unwrap_or_else(|| PathBuf::from(JOURNAL_FILE_NAME))
    }
}
