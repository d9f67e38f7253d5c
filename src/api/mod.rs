//! Task backend API client
//!
//! This module contains the backend abstraction and its HTTP implementation.
//! The `TaskApi` trait is the seam between command handlers and the wire:
//! handlers receive `&dyn TaskApi`, tests point an `HttpTaskApi` at a mock
//! server.
//!
//! Every authenticated call attaches the session's bearer token. Non-success
//! responses are converted into the error taxonomy at this boundary: the
//! backend's structured `{error}` body when present, a per-call-site
//! fallback otherwise. Nothing here retries.

pub mod types;

pub use types::{
    normalize_date, normalize_time, ApiErrorBody, LoginRequest, LoginResponse,
    ResetPasswordRequest, SignupRequest, Task, TaskDraft, TaskFilter, TaskId, UserPayload,
};

use crate::config::ApiConfig;
use crate::error::{Result, TaskdeckError};
use crate::session::Session;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use url::Url;

/// Backend operations the client performs
///
/// Session state is passed explicitly; implementations hold no ambient
/// identity.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Authenticate and return the populated session
    ///
    /// The caller is responsible for persisting it.
    async fn login(&self, email: &str, password: &str) -> Result<Session>;

    /// Register a new account; does not log in
    async fn signup(&self, request: &SignupRequest) -> Result<()>;

    /// Replace the password for an account
    async fn reset_password(&self, email: &str, new_password: &str) -> Result<()>;

    /// Fetch the task collection, optionally filtered
    ///
    /// At most one filter parameter is ever sent.
    async fn list_tasks(&self, session: &Session, filter: Option<&TaskFilter>)
        -> Result<Vec<Task>>;

    /// Create a task; the backend assigns the identifier
    async fn create_task(&self, session: &Session, draft: &TaskDraft) -> Result<Task>;

    /// Replace a task's fields wholesale
    async fn update_task(&self, session: &Session, id: TaskId, draft: &TaskDraft)
        -> Result<Task>;

    /// Delete a task by identifier
    async fn delete_task(&self, session: &Session, id: TaskId) -> Result<()>;
}

/// HTTP implementation of [`TaskApi`] backed by `reqwest`
#[derive(Debug)]
pub struct HttpTaskApi {
    client: Client,
    base_url: Url,
}

impl HttpTaskApi {
    /// Create a client from the API configuration
    ///
    /// # Errors
    ///
    /// Returns error if the base URL does not parse or HTTP client
    /// initialization fails.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("taskdeck/0.2.0")
            .build()
            .map_err(TaskdeckError::Transport)?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| TaskdeckError::Config(format!("Invalid endpoint '{}': {}", path, e)).into())
    }

    fn bearer(session: &Session) -> String {
        format!("Bearer {}", session.token)
    }
}

/// Parse and normalize the configured base URL
///
/// A trailing slash is required for `Url::join` to treat the last path
/// segment as a directory, so one is appended when missing.
fn normalize_base_url(raw: &str) -> Result<Url> {
    let candidate = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    Url::parse(&candidate)
        .map_err(|e| TaskdeckError::Config(format!("Invalid API base URL '{}': {}", raw, e)).into())
}

/// Extract the display message from a non-success response
///
/// Prefers the structured `{error}` body; falls back to the supplied
/// message when the body is absent or not structured data.
async fn error_message(response: Response, fallback: &str) -> (StatusCode, String) {
    let status = response.status();
    let is_json = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false);

    let message = if is_json {
        match response.json::<ApiErrorBody>().await {
            Ok(body) if !body.error.is_empty() => body.error,
            _ => fallback.to_string(),
        }
    } else {
        fallback.to_string()
    };

    (status, message)
}

/// Convert a non-success response on an unauthenticated endpoint
async fn request_error(response: Response, fallback: &str) -> TaskdeckError {
    let (status, message) = error_message(response, fallback).await;
    TaskdeckError::Api {
        status: status.as_u16(),
        message,
    }
}

/// Convert a non-success response on an authenticated task endpoint
///
/// Rejected tokens surface as auth errors with a re-login hint; the stored
/// session is left untouched (explicit `logout` remains the only path that
/// clears it).
async fn task_error(response: Response, fallback: &str) -> TaskdeckError {
    let (status, message) = error_message(response, fallback).await;
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        TaskdeckError::Auth(format!(
            "{} (session may have expired, run `taskdeck login`)",
            message
        ))
    } else {
        TaskdeckError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        tracing::debug!("POST /login for {}", email);
        let response = self
            .client
            .post(self.endpoint("login")?)
            .json(&body)
            .send()
            .await
            .map_err(TaskdeckError::Transport)?;

        if !response.status().is_success() {
            let (_, message) = error_message(response, "Failed to login").await;
            return Err(TaskdeckError::Auth(message).into());
        }

        let login: LoginResponse = response.json().await.map_err(TaskdeckError::Transport)?;
        Ok(Session {
            user_id: login.user.user_id,
            user_name: login.user.user_name,
            email: login.user.email,
            token: login.token,
        })
    }

    async fn signup(&self, request: &SignupRequest) -> Result<()> {
        tracing::debug!("POST /signup for {}", request.email);
        let response = self
            .client
            .post(self.endpoint("signup")?)
            .json(request)
            .send()
            .await
            .map_err(TaskdeckError::Transport)?;

        if !response.status().is_success() {
            return Err(request_error(response, "Failed to sign up").await.into());
        }
        Ok(())
    }

    async fn reset_password(&self, email: &str, new_password: &str) -> Result<()> {
        let body = ResetPasswordRequest {
            email: email.to_string(),
            new_password: new_password.to_string(),
        };

        tracing::debug!("PUT /reset-password for {}", email);
        let response = self
            .client
            .put(self.endpoint("reset-password")?)
            .json(&body)
            .send()
            .await
            .map_err(TaskdeckError::Transport)?;

        if !response.status().is_success() {
            return Err(request_error(response, "Failed to reset password")
                .await
                .into());
        }
        Ok(())
    }

    async fn list_tasks(
        &self,
        session: &Session,
        filter: Option<&TaskFilter>,
    ) -> Result<Vec<Task>> {
        let mut request = self
            .client
            .get(self.endpoint("tasks")?)
            .header(reqwest::header::AUTHORIZATION, Self::bearer(session));

        if let Some(filter) = filter {
            request = request.query(&[filter.query_param()]);
        }

        tracing::debug!("GET /tasks (filter: {:?})", filter);
        let response = request.send().await.map_err(TaskdeckError::Transport)?;

        if !response.status().is_success() {
            return Err(task_error(response, "Failed to fetch tasks").await.into());
        }

        let tasks = response.json().await.map_err(TaskdeckError::Transport)?;
        Ok(tasks)
    }

    async fn create_task(&self, session: &Session, draft: &TaskDraft) -> Result<Task> {
        tracing::debug!("POST /tasks '{}'", draft.task_name);
        let response = self
            .client
            .post(self.endpoint("tasks")?)
            .header(reqwest::header::AUTHORIZATION, Self::bearer(session))
            .json(draft)
            .send()
            .await
            .map_err(TaskdeckError::Transport)?;

        if !response.status().is_success() {
            return Err(task_error(response, "Failed to save task").await.into());
        }

        let task = response.json().await.map_err(TaskdeckError::Transport)?;
        Ok(task)
    }

    async fn update_task(
        &self,
        session: &Session,
        id: TaskId,
        draft: &TaskDraft,
    ) -> Result<Task> {
        tracing::debug!("PUT /tasks/{}", id);
        let response = self
            .client
            .put(self.endpoint(&format!("tasks/{}", id))?)
            .header(reqwest::header::AUTHORIZATION, Self::bearer(session))
            .json(draft)
            .send()
            .await
            .map_err(TaskdeckError::Transport)?;

        if !response.status().is_success() {
            return Err(task_error(response, "Failed to save task").await.into());
        }

        let task = response.json().await.map_err(TaskdeckError::Transport)?;
        Ok(task)
    }

    async fn delete_task(&self, session: &Session, id: TaskId) -> Result<()> {
        tracing::debug!("DELETE /tasks/{}", id);
        let response = self
            .client
            .delete(self.endpoint(&format!("tasks/{}", id))?)
            .header(reqwest::header::AUTHORIZATION, Self::bearer(session))
            .send()
            .await
            .map_err(TaskdeckError::Transport)?;

        if !response.status().is_success() {
            return Err(task_error(response, "Failed to delete task").await.into());
        }
        Ok(())
    }
}
