//! Session state and persistence
//!
//! The session is the authenticated identity returned by a successful login:
//! user id, display name, email, and the opaque bearer token the backend
//! issued. It is persisted as a single JSON document so it survives process
//! restarts, and removed on logout.
//!
//! Persistence failures on restore are deliberately silent: a missing,
//! unreadable, or malformed session file restores as "no session", never as
//! a fatal error.

use crate::error::{Result, TaskdeckError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the session file location
///
/// Points the binary at a test file or alternate path without changing the
/// user's application data dir.
pub const SESSION_FILE_ENV: &str = "TASKDECK_SESSION_FILE";

/// The authenticated identity held by the client after login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub email: String,
    pub token: String,
}

impl Session {
    /// A session is only usable with a non-empty bearer token
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}

/// File-backed store for the current session
///
/// Owns the single well-known location of the persisted session. All
/// persistence flows through this type; the rest of the crate passes
/// `Session` values around explicitly.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store at the default location
    ///
    /// Honors the `TASKDECK_SESSION_FILE` environment variable, falling back
    /// to `session.json` in the platform data directory.
    pub fn new() -> Result<Self> {
        if let Ok(override_path) = std::env::var(SESSION_FILE_ENV) {
            return Ok(Self::with_path(override_path));
        }

        let proj_dirs = ProjectDirs::from("com", "taskdeck", "taskdeck").ok_or_else(|| {
            TaskdeckError::Storage("Could not determine data directory".into())
        })?;

        Ok(Self::with_path(proj_dirs.data_dir().join("session.json")))
    }

    /// Create a store that uses the specified file path
    ///
    /// Primarily useful for tests where the default application data
    /// directory is not desirable.
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the persisted session file
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Restore the persisted session, if any
    ///
    /// Returns `None` when the file is absent, unreadable, malformed, or
    /// holds an empty token. Never makes a network call and never fails.
    pub fn restore(&self) -> Option<Session> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!("No session restored from {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) if session.has_token() => Some(session),
            Ok(_) => {
                tracing::debug!("Persisted session has no token; treating as logged out");
                None
            }
            Err(e) => {
                tracing::debug!("Malformed session file; treating as logged out: {}", e);
                None
            }
        }
    }

    /// Persist the session, overwriting any prior one
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TaskdeckError::Storage(format!(
                    "Failed to create session directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, json).map_err(|e| {
            TaskdeckError::Storage(format!(
                "Failed to write session file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    /// Remove the persisted session
    ///
    /// Missing file is not an error; logout is idempotent.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TaskdeckError::Storage(format!(
                "Failed to remove session file {}: {}",
                self.path.display(),
                e
            ))
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn sample_session() -> Session {
        Session {
            user_id: 42,
            user_name: "frida".to_string(),
            email: "frida@example.com".to_string(),
            token: "tok-abc123".to_string(),
        }
    }

    fn store_in_tempdir() -> (SessionStore, tempfile::TempDir) {
        let dir = tempdir().expect("failed to create tempdir");
        let store = SessionStore::with_path(dir.path().join("session.json"));
        (store, dir)
    }

    #[test]
    fn test_restore_returns_none_when_file_absent() {
        let (store, _dir) = store_in_tempdir();
        assert!(store.restore().is_none());
    }

    #[test]
    fn test_save_then_restore_roundtrip() {
        let (store, _dir) = store_in_tempdir();
        let session = sample_session();
        store.save(&session).expect("save failed");

        let restored = store.restore().expect("expected a session");
        assert_eq!(restored, session);
    }

    #[test]
    fn test_save_overwrites_prior_session() {
        let (store, _dir) = store_in_tempdir();
        store.save(&sample_session()).expect("first save failed");

        let newer = Session {
            user_id: 99,
            user_name: "otto".to_string(),
            email: "otto@example.com".to_string(),
            token: "tok-new".to_string(),
        };
        store.save(&newer).expect("second save failed");

        let restored = store.restore().expect("expected a session");
        assert_eq!(restored.user_id, 99);
        assert_eq!(restored.token, "tok-new");
    }

    #[test]
    fn test_restore_treats_malformed_json_as_absence() {
        let (store, _dir) = store_in_tempdir();
        std::fs::write(store.path(), "{not json").expect("write failed");
        assert!(store.restore().is_none());
    }

    #[test]
    fn test_restore_treats_empty_token_as_absence() {
        let (store, _dir) = store_in_tempdir();
        let tokenless = Session {
            token: String::new(),
            ..sample_session()
        };
        let json = serde_json::to_string(&tokenless).unwrap();
        std::fs::write(store.path(), json).expect("write failed");
        assert!(store.restore().is_none());
    }

    #[test]
    fn test_clear_removes_session() {
        let (store, _dir) = store_in_tempdir();
        store.save(&sample_session()).expect("save failed");
        store.clear().expect("clear failed");
        assert!(store.restore().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (store, _dir) = store_in_tempdir();
        store.clear().expect("first clear failed");
        store.clear().expect("second clear failed");
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempdir().expect("failed to create tempdir");
        let store = SessionStore::with_path(dir.path().join("nested").join("session.json"));
        store.save(&sample_session()).expect("save failed");
        assert!(store.path().exists());
    }

    #[test]
    fn test_has_token() {
        assert!(sample_session().has_token());
        let tokenless = Session {
            token: String::new(),
            ..sample_session()
        };
        assert!(!tokenless.has_token());
    }

    #[test]
    #[serial]
    fn test_new_respects_env_override() {
        let dir = tempdir().expect("failed to create tempdir");
        let path = dir.path().join("nested").join("session.json");
        std::env::set_var(SESSION_FILE_ENV, path.to_string_lossy().to_string());

        let store = SessionStore::new().expect("new failed with env override");
        assert_eq!(store.path(), path);

        std::env::remove_var(SESSION_FILE_ENV);
    }
}
