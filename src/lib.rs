//! Taskdeck - task manager client library
//!
//! This library provides the core functionality for the Taskdeck client,
//! including the backend API abstraction, session persistence, client-side
//! validation, and the in-memory task board.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `api`: Backend abstraction (`TaskApi`) and the reqwest HTTP client
//! - `auth`: Login/signup/reset operations and client-side validation
//! - `session`: The authenticated session and its file-backed store
//! - `tasks`: In-memory task board and the fetch/CRUD/toggle operations
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//! - `commands`: CLI-facing command handlers
//!
//! # Example
//!
//! ```no_run
//! use taskdeck::api::HttpTaskApi;
//! use taskdeck::config::Config;
//! use taskdeck::session::SessionStore;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::load("config/config.yaml", &Default::default())?;
//! config.validate()?;
//!
//! let api = HttpTaskApi::new(&config.api)?;
//! let store = SessionStore::new()?;
//! let session = taskdeck::auth::login(&api, &store, "me@example.com", "secret").await?;
//! let tasks = taskdeck::api::TaskApi::list_tasks(&api, &session, None).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod session;
pub mod tasks;

// Re-export commonly used types
pub use api::{HttpTaskApi, Task, TaskApi, TaskDraft, TaskFilter, TaskId};
pub use config::Config;
pub use error::{Result, TaskdeckError};
pub use session::{Session, SessionStore};
pub use tasks::{TaskBoard, TaskCounts};

#[cfg(test)]
pub mod test_utils;
