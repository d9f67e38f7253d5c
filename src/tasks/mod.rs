//! Task operations
//!
//! The fetch/create/update/delete/toggle flow over the task collection.
//! Each operation takes the API seam, the session, and the board explicitly
//! and applies the cache discipline the client commits to:
//!
//! - fetch replaces the list wholesale, and only on success;
//! - create and update trigger a full refetch so the list reflects
//!   server-assigned identifiers and canonical formatting;
//! - delete and toggle patch the list in place, since the removal or flip
//!   is already known client-side.

pub mod board;

pub use board::{TaskBoard, TaskCounts};

use crate::api::{Task, TaskApi, TaskDraft, TaskFilter, TaskId};
use crate::auth::validate_task_name;
use crate::error::{Result, TaskdeckError};
use crate::session::Session;

/// Fetch the task collection and replace the board's list
///
/// On failure the board keeps its previous contents; the caller surfaces
/// the error next to the stale list.
pub async fn refresh(
    api: &dyn TaskApi,
    session: &Session,
    board: &mut TaskBoard,
    filter: Option<&TaskFilter>,
) -> Result<()> {
    let tasks = api.list_tasks(session, filter).await?;
    tracing::debug!("Fetched {} tasks", tasks.len());
    board.replace(tasks);
    Ok(())
}

/// Create a task, then refetch the full list
///
/// Rejects empty or whitespace-only names before sending. Returns the
/// created task as the backend reported it.
pub async fn create(
    api: &dyn TaskApi,
    session: &Session,
    board: &mut TaskBoard,
    draft: &TaskDraft,
) -> Result<Task> {
    validate_task_name(&draft.task_name)?;
    let created = api.create_task(session, draft).await?;
    refresh(api, session, board, None).await?;
    Ok(created)
}

/// Update a task wholesale, then refetch the full list
///
/// Same empty-name guard as create; the payload includes unchanged fields.
pub async fn update(
    api: &dyn TaskApi,
    session: &Session,
    board: &mut TaskBoard,
    id: TaskId,
    draft: &TaskDraft,
) -> Result<Task> {
    validate_task_name(&draft.task_name)?;
    let updated = api.update_task(session, id, draft).await?;
    refresh(api, session, board, None).await?;
    Ok(updated)
}

/// Delete a task and remove it from the board in place
///
/// The caller is responsible for interactive confirmation; this function
/// assumes consent. On failure the board is untouched.
pub async fn remove(
    api: &dyn TaskApi,
    session: &Session,
    board: &mut TaskBoard,
    id: TaskId,
) -> Result<()> {
    api.delete_task(session, id).await?;
    board.remove(id);
    Ok(())
}

/// Invert a task's completion flag and patch the board in place
///
/// Sends the full task payload with `completed` inverted; on success only
/// the in-memory flag flips, no refetch. On failure the board is untouched.
pub async fn toggle(
    api: &dyn TaskApi,
    session: &Session,
    board: &mut TaskBoard,
    id: TaskId,
) -> Result<Task> {
    let task = board
        .get(id)
        .cloned()
        .ok_or_else(|| TaskdeckError::Validation(format!("No task with id {}", id)))?;

    let draft = TaskDraft::toggled(&task);
    let updated = api.update_task(session, id, &draft).await?;
    board.set_completed(id, !task.completed);
    Ok(updated)
}
