//! Error types for Taskdeck
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Taskdeck operations
///
/// This enum encompasses all possible errors that can occur during
/// client-side validation, API requests, session persistence, and
/// configuration loading.
#[derive(Error, Debug)]
pub enum TaskdeckError {
    /// Client-side validation failures (never reach the network)
    #[error("{0}")]
    Validation(String),

    /// Authentication failures (bad credentials, expired or rejected token)
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Non-success HTTP status from the backend
    ///
    /// The message is taken from the backend's structured `{error}` body
    /// when present, otherwise a per-call-site fallback.
    #[error("Request failed (status {status}): {message}")]
    Api {
        /// HTTP status code returned by the backend
        status: u16,
        /// Human-readable message for display
        message: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session persistence errors
    #[error("Session storage error: {0}")]
    Storage(String),

    /// HTTP transport errors (unreachable host, timeouts, malformed response)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl TaskdeckError {
    /// Whether this error came from client-side validation
    ///
    /// Validation errors are reported immediately and never retried; the
    /// distinction matters to handlers that only want to refresh state
    /// after a request actually went out.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias for Taskdeck operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let error = TaskdeckError::Validation("Task name can't be empty".to_string());
        assert_eq!(error.to_string(), "Task name can't be empty");
    }

    #[test]
    fn test_auth_error_display() {
        let error = TaskdeckError::Auth("invalid credentials".to_string());
        assert_eq!(error.to_string(), "Authentication error: invalid credentials");
    }

    #[test]
    fn test_api_error_display() {
        let error = TaskdeckError::Api {
            status: 500,
            message: "Failed to fetch tasks".to_string(),
        };
        let s = error.to_string();
        assert!(s.contains("status 500"));
        assert!(s.contains("Failed to fetch tasks"));
    }

    #[test]
    fn test_config_error_display() {
        let error = TaskdeckError::Config("invalid base URL".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid base URL");
    }

    #[test]
    fn test_storage_error_display() {
        let error = TaskdeckError::Storage("could not determine data directory".to_string());
        assert_eq!(
            error.to_string(),
            "Session storage error: could not determine data directory"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: TaskdeckError = io_error.into();
        assert!(matches!(error, TaskdeckError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_str = "{invalid json}";
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let error: TaskdeckError = json_error.into();
        assert!(matches!(error, TaskdeckError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_str = "invalid: : yaml";
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let error: TaskdeckError = yaml_error.into();
        assert!(matches!(error, TaskdeckError::Yaml(_)));
    }

    #[test]
    fn test_is_validation() {
        assert!(TaskdeckError::Validation("x".into()).is_validation());
        assert!(!TaskdeckError::Auth("x".into()).is_validation());
        assert!(!TaskdeckError::Api {
            status: 400,
            message: "x".into()
        }
        .is_validation());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TaskdeckError>();
    }
}
