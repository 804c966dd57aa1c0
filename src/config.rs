//! Configuration management for the word list builder.
//!
//! Handles loading and validating configuration from
//! platform-specific config directories. The scraped site and the
//! output file are fixed and deliberately absent from here.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application name used for config directory.
const APP_NAME: &str = "Wordlist";

/// Default config filename.
const CONFIG_FILENAME: &str = "config.toml";

/// Main configuration structure.
///
/// The file is optional and only ever read; every field has a default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP client settings.
    pub http: HttpConfig,

    /// Scraping diagnostics.
    pub scraping: ScrapingConfig,
}

/// HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Total timeout for a single request in seconds.
    pub timeout_sec: u64,

    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_sec: 30,
            user_agent: concat!("wordlist/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Web scraping configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapingConfig {
    /// Enable per-request debug logging.
    pub debug: bool,
}

impl Config {
    /// Returns the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Returns the full path to the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILENAME))
    }

    /// Loads configuration from the default location.
    ///
    /// Falls back to the defaults when the platform has no config directory.
    /// Nothing is ever written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(ConfigError::NoConfigDir) => Ok(Config::default()),
            Err(e) => Err(e),
        }
    }

    /// Loads configuration from a specific path.
    ///
    /// Returns the defaults if there is no file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Loads and validates the configuration, falling back to the defaults
    /// on any problem so that a broken config never stops a run.
    ///
    /// The problem, if any, is handed back for the caller to report.
    pub fn load_or_default() -> (Self, Option<ConfigError>) {
        Self::validated_or_default(Self::load())
    }

    fn validated_or_default(loaded: Result<Self, ConfigError>) -> (Self, Option<ConfigError>) {
        match loaded.and_then(|config| config.validate().map(|()| config)) {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.timeout_sec == 0 {
            return Err(ConfigError::InvalidValue {
                key: "http.timeout_sec".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.http.user_agent.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "http.user_agent".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.http.timeout_sec, 30);
        assert!(config.http.user_agent.starts_with("wordlist/"));
        assert!(!config.scraping.debug);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = Config::default();
        config.http.timeout_sec = 5;
        config.scraping.debug = true;
        let file = NamedTempFile::new().unwrap();

        std::fs::write(file.path(), toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = Config::load_from(file.path()).unwrap();
        assert_eq!(loaded.http.timeout_sec, 5);
        assert!(loaded.scraping.debug);
    }

    #[test]
    fn test_missing_file_uses_defaults_without_writing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILENAME);

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.http.timeout_sec, 30);
        assert!(!path.exists());
        assert!(!dir.path().join("nested").exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_config_dir_blocked_by_file_uses_defaults() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().join("Wordlist").join(CONFIG_FILENAME);

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.http.timeout_sec, 30);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[scraping]\ndebug = true\n").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert!(config.scraping.debug);
        assert_eq!(config.http.timeout_sec, 30);
    }

    #[test]
    fn test_invalid_toml() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[http\ntimeout_sec = ").unwrap();

        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_broken_config_falls_back_to_defaults() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[http]\ntimeout_sec = 0\n").unwrap();

        let (config, problem) = Config::validated_or_default(Config::load_from(file.path()));
        assert_eq!(config.http.timeout_sec, 30);
        assert!(matches!(problem, Some(ConfigError::InvalidValue { .. })));

        std::fs::write(file.path(), "not toml [").unwrap();
        let (config, problem) = Config::validated_or_default(Config::load_from(file.path()));
        assert!(config.validate().is_ok());
        assert!(matches!(problem, Some(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_valid_config_reports_no_problem() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[http]\ntimeout_sec = 7\n").unwrap();

        let (config, problem) = Config::validated_or_default(Config::load_from(file.path()));
        assert_eq!(config.http.timeout_sec, 7);
        assert!(problem.is_none());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.http.timeout_sec = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.http.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
