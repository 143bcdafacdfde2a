//! Configuration management for the portfolio site.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "portfolio";

/// Default message store file name.
const MESSAGES_FILE_NAME: &str = "messages.json";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "PORTFOLIO_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `PORTFOLIO_`, `__` between levels)
/// 2. TOML config file `portfolio/config.toml` under the platform config directory
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration.
    pub server: ServerConfig,
    /// Message store configuration.
    pub storage: StorageConfig,
    /// Site content configuration.
    pub site: SiteConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Number of worker threads. `None` uses one per physical core.
    pub workers: Option<usize>,
}

/// Message store configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the contact message file.
    /// Defaults to `~/.local/share/portfolio/messages.json`
    pub messages_path: Option<PathBuf>,
}

/// Site content configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Name shown in page titles and the header.
    pub owner: String,
    /// Years of professional experience reported by `/api/stats`.
    pub years_experience: u32,
    /// Number of certifications reported by `/api/stats`.
    pub certifications: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 10_000,
            workers: None,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Portfolio".to_string(),
            years_experience: 2,
            certifications: 5,
        }
    }
}

impl Config {
    /// Load configuration, reading the TOML layer from `config_path` or the
    /// default location.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(Error::config_validation("server.host must not be empty"));
        }

        if self.server.workers == Some(0) {
            return Err(Error::config_validation(
                "server.workers must be greater than 0",
            ));
        }

        if let Some(path) = &self.storage.messages_path {
            if path.file_name().is_none() {
                return Err(Error::config_validation(format!(
                    "storage.messages_path must name a file: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// Get the message store path, resolving defaults if not set.
    #[must_use]
    pub fn messages_path(&self) -> PathBuf {
        self.storage
            .messages_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(MESSAGES_FILE_NAME))
    }

    /// Get the `host:port` pair the server binds to.
    #[must_use]
    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}
