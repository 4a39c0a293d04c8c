//! Configuration management for cybershield.
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
const DATA_DIR_NAME: &str = "cybershield";

/// Default database file name.
const DATABASE_FILE_NAME: &str = "cases.db";

/// Default contact endpoint. A placeholder; the operator points this at the
/// real service.
const DEFAULT_CONTACT_ENDPOINT: &str = "https://cybershield-bd.example/api/contact";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `CYBERSHIELD_`)
/// 2. TOML config file at `~/.config/cybershield/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Case tracker configuration.
    pub tracker: TrackerConfig,
    /// Contact form configuration.
    pub contact: ContactConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the case database file.
    /// Defaults to `~/.local/share/cybershield/cases.db`
    pub database_path: Option<PathBuf>,
}

/// Case tracker configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// How many cases `recent` lists when no limit is given.
    pub recent_limit: usize,
    /// How many identifier draws to try before giving up on a collision run.
    pub id_mint_attempts: usize,
}

/// Contact form configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// URL the contact form POSTs to.
    pub endpoint: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            recent_limit: 20,
            id_mint_attempts: 16,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CONTACT_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `CYBERSHIELD_`)
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
            .merge(Env::prefixed("CYBERSHIELD_").split("_"));

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
        if self.tracker.recent_limit == 0 {
            return Err(Error::ConfigValidation {
                message: "recent_limit must be greater than 0".to_string(),
            });
        }

        if self.tracker.id_mint_attempts == 0 {
            return Err(Error::ConfigValidation {
                message: "id_mint_attempts must be greater than 0".to_string(),
            });
        }

        if !self.contact.endpoint.starts_with("http://")
            && !self.contact.endpoint.starts_with("https://")
        {
            return Err(Error::ConfigValidation {
                message: format!(
                    "contact endpoint must be an http(s) URL: {}",
                    self.contact.endpoint
                ),
            });
        }

        Ok(())
    }

    /// Get the database path, resolving defaults if not set.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DATABASE_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.storage.database_path.is_none());
        assert_eq!(config.tracker.recent_limit, 20);
        assert_eq!(config.tracker.id_mint_attempts, 16);
        assert_eq!(config.contact.endpoint, DEFAULT_CONTACT_ENDPOINT);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_recent_limit() {
        let mut config = Config::default();
        config.tracker.recent_limit = 0;

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("recent_limit"));
    }

    #[test]
    fn test_validate_zero_mint_attempts() {
        let mut config = Config::default();
        config.tracker.id_mint_attempts = 0;

        let result = config.validate();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("id_mint_attempts"));
    }

    #[test]
    fn test_validate_bad_endpoint() {
        let mut config = Config::default();
        config.contact.endpoint = "ftp://contact.example".to_string();

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("endpoint"));
    }

    #[test]
    fn test_database_path_default() {
        let config = Config::default();
        let path = config.database_path();

        assert!(path.to_string_lossy().contains("cases.db"));
        assert!(path.to_string_lossy().contains("cybershield"));
    }

    #[test]
    fn test_database_path_custom() {
        let mut config = Config::default();
        config.storage.database_path = Some(PathBuf::from("/custom/path/cases.db"));

        assert_eq!(
            config.database_path(),
            PathBuf::from("/custom/path/cases.db")
        );
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("cybershield"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_default_data_dir() {
        let path = Config::default_data_dir();
        assert!(path.to_string_lossy().contains("cybershield"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_serialize() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("recent_limit"));
        assert!(json.contains("endpoint"));
    }

    #[test]
    fn test_tracker_config_deserialize() {
        let json = r#"{"recent_limit": 5, "id_mint_attempts": 4}"#;
        let tracker: TrackerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(tracker.recent_limit, 5);
        assert_eq!(tracker.id_mint_attempts, 4);
    }

    #[test]
    fn test_config_clone_and_debug() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(config, cloned);
        assert!(format!("{config:?}").contains("Config"));
    }
}
