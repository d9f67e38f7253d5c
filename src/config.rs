//! Configuration management for Taskdeck
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.
//!
//! Precedence, lowest to highest: built-in defaults, the YAML config file,
//! `TASKDECK_*` environment variables, CLI flags.

use crate::error::{Result, TaskdeckError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "TASKDECK_API_URL";

/// Main configuration structure for Taskdeck
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backend API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Session persistence settings
    #[serde(default)]
    pub session: SessionConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the task backend; all endpoints are relative to it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Client-side request timeout (seconds)
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Session persistence configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Override for the session file path
    ///
    /// When unset, the platform data directory is used (or the
    /// `TASKDECK_SESSION_FILE` environment variable when present).
    #[serde(default)]
    pub file: Option<String>,
}

impl Config {
    /// Load configuration from a file with env and CLI overrides applied
    ///
    /// A missing file is not an error; defaults are used so the client
    /// works out of the box against a locally-configured backend.
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::debug!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| TaskdeckError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| TaskdeckError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(base_url) = std::env::var(API_URL_ENV) {
            self.api.base_url = base_url;
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(api_url) = &cli.api_url {
            self.api.base_url = api_url.clone();
        }
        if let Some(session_file) = &cli.session_file {
            self.session.file = Some(session_file.clone());
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is empty or unparseable, or the
    /// timeout is zero.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(TaskdeckError::Config("API base URL must not be empty".into()).into());
        }
        Url::parse(&self.api.base_url).map_err(|e| {
            TaskdeckError::Config(format!(
                "Invalid API base URL '{}': {}",
                self.api.base_url, e
            ))
        })?;
        if self.api.timeout_seconds == 0 {
            return Err(
                TaskdeckError::Config("Request timeout must be greater than zero".into()).into(),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use serial_test::serial;

    #[test]
    fn test_default_config_validates() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout_seconds, 30);
        assert!(config.session.file.is_none());
    }

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r#"
api:
  base_url: https://tasks.example.com
  timeout_seconds: 10
session:
  file: /tmp/session.json
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.api.base_url, "https://tasks.example.com");
        assert_eq!(config.api.timeout_seconds, 10);
        assert_eq!(config.session.file.as_deref(), Some("/tmp/session.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
api:
  base_url: https://tasks.example.com
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.api.timeout_seconds, 30);
        assert!(config.session.file.is_none());
    }

    #[test]
    fn test_validate_rejects_empty_base_url() {
        let config = Config {
            api: ApiConfig {
                base_url: "  ".to_string(),
                ..ApiConfig::default()
            },
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_validate_rejects_malformed_base_url() {
        let config = Config {
            api: ApiConfig {
                base_url: "not a url".to_string(),
                ..ApiConfig::default()
            },
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid API base URL"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            api: ApiConfig {
                timeout_seconds: 0,
                ..ApiConfig::default()
            },
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn test_cli_overrides_take_precedence() {
        let mut config = Config::default();
        let cli = Cli {
            api_url: Some("https://cli.example.com".to_string()),
            session_file: Some("/tmp/cli-session.json".to_string()),
            ..Cli::default()
        };
        config.apply_cli_overrides(&cli);
        assert_eq!(config.api.base_url, "https://cli.example.com");
        assert_eq!(
            config.session.file.as_deref(),
            Some("/tmp/cli-session.json")
        );
    }

    #[test]
    #[serial]
    fn test_env_override_applies() {
        std::env::set_var(API_URL_ENV, "https://env.example.com");
        let mut config = Config::default();
        config.apply_env_vars();
        std::env::remove_var(API_URL_ENV);
        assert_eq!(config.api.base_url, "https://env.example.com");
    }

    #[test]
    #[serial]
    fn test_load_missing_file_uses_defaults() {
        std::env::remove_var(API_URL_ENV);
        let cli = Cli::default();
        let config = Config::load("/nonexistent/config.yaml", &cli).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");
    }
}
