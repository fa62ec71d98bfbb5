use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/listfeed/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("listfeed").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The service endpoint is an http(s) URL with a non-empty path
    /// - Timeouts are positive
    /// - The mock delay range is not inverted
    /// - The probe URL parses when the probe is enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        let service = &self.service;
        if service.path.trim_matches('/').is_empty() {
            return Err(invalid("service.path must not be empty"));
        }
        check_http_url("service.base_url", &service.endpoint())?;

        if service.timeout_seconds == 0 || service.connect_timeout_seconds == 0 {
            return Err(invalid("service timeouts must be greater than zero"));
        }

        if self.mock.delay_min_ms > self.mock.delay_max_ms {
            return Err(invalid(format!(
                "mock.delay_min_ms ({}) exceeds mock.delay_max_ms ({})",
                self.mock.delay_min_ms, self.mock.delay_max_ms
            )));
        }

        if self.probe.enabled {
            check_http_url("probe.url", &self.probe.url)?;
            if self.probe.timeout_seconds == 0 {
                return Err(invalid("probe.timeout_seconds must be greater than zero"));
            }
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}

fn check_http_url(field: &str, raw: &str) -> Result<(), ConfigError> {
    let url = Url::parse(raw).map_err(|e| invalid(format!("{} '{}' is not a URL: {}", field, raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!(
            "{} must use http or https, got '{}'",
            field, other
        ))),
    }
}
