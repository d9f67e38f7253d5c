//! Wire types for the task backend API
//!
//! Request and response structures exchanged with the backend, plus the
//! search filter and the field normalization applied when priming an edit
//! form from a stored task.
//!
//! Dates and times travel as strings on the wire: the backend may return a
//! `task_date` that carries a time component (`2026-05-01T00:00:00`) or a
//! `task_time` with seconds precision, so the client keeps the raw value
//! and normalizes only at the edit boundary.

use crate::error::{Result, TaskdeckError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Server-assigned task identifier, immutable once issued
pub type TaskId = i64;

/// A user-owned task as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: TaskId,
    pub task_name: String,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub task_date: Option<String>,
    #[serde(default)]
    pub task_time: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Build an editable draft from this task, normalizing date and time
    /// to the fixed-width forms input widgets expect.
    pub fn edit_draft(&self) -> TaskDraft {
        TaskDraft {
            task_name: self.task_name.clone(),
            location_name: self.location_name.clone(),
            task_date: self.task_date.as_deref().map(normalize_date),
            task_time: self.task_time.as_deref().map(normalize_time),
            completed: self.completed,
        }
    }
}

/// Task fields submitted on create and update (no identifier)
///
/// Updates send the full payload including unchanged fields; the backend
/// replaces the task wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub task_name: String,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub task_date: Option<String>,
    #[serde(default)]
    pub task_time: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl TaskDraft {
    /// Full-payload draft for toggling a task's completion flag
    pub fn toggled(task: &Task) -> Self {
        TaskDraft {
            task_name: task.task_name.clone(),
            location_name: task.location_name.clone(),
            task_date: task.task_date.clone(),
            task_time: task.task_time.clone(),
            completed: !task.completed,
        }
    }
}

/// Truncate a wire date to its calendar-date portion
///
/// `2026-05-01T00:00:00` becomes `2026-05-01`; values without a time
/// component pass through unchanged.
pub fn normalize_date(raw: &str) -> String {
    match raw.split_once('T') {
        Some((date, _)) => date.to_string(),
        None => raw.to_string(),
    }
}

/// Truncate a wire time to `HH:MM`
///
/// `14:30:00` becomes `14:30`; shorter values pass through unchanged.
pub fn normalize_time(raw: &str) -> String {
    if raw.len() > 5 {
        raw[..5].to_string()
    } else {
        raw.to_string()
    }
}

/// Search filter over the task collection
///
/// At most one filter is active at a time; the two modes are mutually
/// exclusive in the outgoing query string.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskFilter {
    /// Substring match on task name
    ByName(String),
    /// Exact calendar-date match
    ByDate(NaiveDate),
}

impl TaskFilter {
    /// Build a name filter; empty or whitespace-only input means no filter
    pub fn by_name(query: &str) -> Option<Self> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self::ByName(trimmed.to_string()))
        }
    }

    /// Build a date filter from `YYYY-MM-DD` input
    ///
    /// Empty input means no filter; anything else must parse as a calendar
    /// date so a malformed value never reaches the backend.
    pub fn by_date(query: &str) -> Result<Option<Self>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
            TaskdeckError::Validation(format!(
                "Invalid date '{}': expected YYYY-MM-DD",
                trimmed
            ))
        })?;
        Ok(Some(Self::ByDate(date)))
    }

    /// The single query parameter this filter contributes
    pub fn query_param(&self) -> (&'static str, String) {
        match self {
            Self::ByName(name) => ("task_name", name.clone()),
            Self::ByDate(date) => ("task_date", date.format("%Y-%m-%d").to_string()),
        }
    }
}

/// Login request body
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User payload inside a successful login response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub email: String,
}

/// Successful login response: user payload plus bearer token
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: UserPayload,
    pub token: String,
}

/// Signup request body
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Password reset request body
#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub new_password: String,
}

/// Structured error body the backend sends on non-success statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
