/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes three top-level command modules:

- `auth`      — Login, signup, password reset, logout, whoami
- `tasks`     — One-shot task operations (list, add, edit, delete, toggle)
- `dashboard` — Interactive task dashboard REPL

These handlers are intentionally small and use the library components:
the API client, the session store, and the task board.
*/

pub mod auth;
pub mod dashboard;
pub mod tasks;

use crate::config::Config;
use crate::error::{Result, TaskdeckError};
use crate::session::{Session, SessionStore};

/// Build the session store, honoring the configured path override
pub fn session_store(config: &Config) -> Result<SessionStore> {
    match &config.session.file {
        Some(path) => Ok(SessionStore::with_path(path)),
        None => SessionStore::new(),
    }
}

/// Restore the stored session or fail with a login hint
///
/// Every task operation is gated on this; auth commands are not.
pub fn require_session(store: &SessionStore) -> Result<Session> {
    store.restore().ok_or_else(|| {
        TaskdeckError::Auth("Not logged in. Run `taskdeck login` first.".to_string()).into()
    })
}
