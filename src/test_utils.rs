//! Test utilities for Taskdeck
//!
//! This module provides common test helpers: temporary directories,
//! sample sessions and tasks, and assertion helpers.

use crate::api::Task;
use crate::session::Session;
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// A session with a usable token
pub fn test_session() -> Session {
    Session {
        user_id: 42,
        user_name: "frida".to_string(),
        email: "frida@example.com".to_string(),
        token: "tok-test".to_string(),
    }
}

/// A small task with only the required fields set
pub fn test_task(id: i64, name: &str, completed: bool) -> Task {
    Task {
        task_id: id,
        task_name: name.to_string(),
        location_name: None,
        task_date: None,
        task_time: None,
        completed,
    }
}

/// A test configuration YAML string
pub fn test_config_yaml() -> String {
    r#"
api:
  base_url: http://localhost:3000
  timeout_seconds: 5
session:
  file: /tmp/taskdeck-test-session.json
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_temp_dir_creation() {
        let dir = temp_dir();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_test_session_has_token() {
        assert!(test_session().has_token());
    }

    #[test]
    fn test_test_task_fields() {
        let task = test_task(3, "Water plants", true);
        assert_eq!(task.task_id, 3);
        assert_eq!(task.task_name, "Water plants");
        assert!(task.completed);
        assert!(task.location_name.is_none());
    }

    #[test]
    fn test_test_config_yaml_parses_and_validates() {
        let config: Config = serde_yaml::from_str(&test_config_yaml()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.timeout_seconds, 5);
    }
}
