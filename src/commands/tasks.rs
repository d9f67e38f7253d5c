//! One-shot task command handlers
//!
//! Each handler builds the API client, restores the session, runs the
//! operation, and renders the result. Rendering helpers here are shared
//! with the interactive dashboard.

use super::{require_session, session_store};
use crate::api::{HttpTaskApi, Task, TaskDraft, TaskFilter};
use crate::config::Config;
use crate::error::{Result, TaskdeckError};
use crate::tasks::{self, TaskBoard, TaskCounts};
use chrono::{NaiveDate, NaiveTime};
use colored::Colorize;
use prettytable::{format, Table};

/// Build the single active filter from CLI input
///
/// The parser already rejects supplying both; empty values mean no filter.
pub fn parse_filter(name: Option<&str>, date: Option<&str>) -> Result<Option<TaskFilter>> {
    if let Some(name) = name {
        return Ok(TaskFilter::by_name(name));
    }
    if let Some(date) = date {
        return TaskFilter::by_date(date);
    }
    Ok(None)
}

/// Validate a date field before it goes on the wire
pub fn parse_date_field(raw: &str) -> Result<Option<String>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        TaskdeckError::Validation(format!("Invalid date '{}': expected YYYY-MM-DD", trimmed))
    })?;
    Ok(Some(trimmed.to_string()))
}

/// Validate a time field before it goes on the wire
pub fn parse_time_field(raw: &str) -> Result<Option<String>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M").map_err(|_| {
        TaskdeckError::Validation(format!("Invalid time '{}': expected HH:MM", trimmed))
    })?;
    Ok(Some(trimmed.to_string()))
}

/// Render the derived counters on one line
pub fn print_counts(counts: &TaskCounts) {
    println!(
        "{} {}   {} {}   {} {}",
        "Total:".bold(),
        counts.total,
        "Upcoming:".bold(),
        counts.upcoming.to_string().blue(),
        "Completed:".bold(),
        counts.completed.to_string().green()
    );
}

/// Render the task list as a table
pub fn print_table(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("{}", "No tasks yet. Create your first task!".yellow());
        return;
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);

    table.add_row(prettytable::row![
        "ID".bold(),
        "Name".bold(),
        "Location".bold(),
        "Date".bold(),
        "Time".bold(),
        "Status".bold()
    ]);

    for task in tasks {
        let status = if task.completed {
            "done".green()
        } else {
            "open".yellow()
        };
        table.add_row(prettytable::row![
            task.task_id.to_string().cyan(),
            task.task_name,
            task.location_name.as_deref().unwrap_or("-"),
            task.task_date.as_deref().unwrap_or("-"),
            task.task_time.as_deref().unwrap_or("-"),
            status
        ]);
    }

    table.printstd();
}

/// List tasks, optionally filtered, as a table or raw JSON
pub async fn run_list(
    config: &Config,
    name: Option<&str>,
    date: Option<&str>,
    json: bool,
) -> Result<()> {
    let api = HttpTaskApi::new(&config.api)?;
    let store = session_store(config)?;
    let session = require_session(&store)?;

    let filter = parse_filter(name, date)?;
    let mut board = TaskBoard::new();
    tasks::refresh(&api, &session, &mut board, filter.as_ref()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(board.tasks())?);
        return Ok(());
    }

    print_counts(&board.counts());
    print_table(board.tasks());
    Ok(())
}

/// Create a task from CLI fields
pub async fn run_add(
    config: &Config,
    name: &str,
    location: Option<&str>,
    date: Option<&str>,
    time: Option<&str>,
) -> Result<()> {
    let api = HttpTaskApi::new(&config.api)?;
    let store = session_store(config)?;
    let session = require_session(&store)?;

    let draft = TaskDraft {
        task_name: name.trim().to_string(),
        location_name: location.map(|l| l.to_string()),
        task_date: date.map(parse_date_field).transpose()?.flatten(),
        task_time: time.map(parse_time_field).transpose()?.flatten(),
        completed: false,
    };

    let mut board = TaskBoard::new();
    let created = tasks::create(&api, &session, &mut board, &draft).await?;
    println!(
        "{}",
        format!("Created task {} '{}'", created.task_id, created.task_name).green()
    );
    print_counts(&board.counts());
    print_table(board.tasks());
    Ok(())
}

/// Edit an existing task, sending the full payload back
///
/// Unspecified flags keep the task's current values; the current date and
/// time are normalized the same way an edit form would be primed.
pub async fn run_edit(
    config: &Config,
    id: i64,
    name: Option<&str>,
    location: Option<&str>,
    date: Option<&str>,
    time: Option<&str>,
) -> Result<()> {
    let api = HttpTaskApi::new(&config.api)?;
    let store = session_store(config)?;
    let session = require_session(&store)?;

    let mut board = TaskBoard::new();
    tasks::refresh(&api, &session, &mut board, None).await?;

    let current = board
        .get(id)
        .ok_or_else(|| TaskdeckError::Validation(format!("No task with id {}", id)))?;

    let mut draft = current.edit_draft();
    if let Some(name) = name {
        draft.task_name = name.trim().to_string();
    }
    if let Some(location) = location {
        draft.location_name = Some(location.to_string());
    }
    if let Some(date) = date {
        draft.task_date = parse_date_field(date)?;
    }
    if let Some(time) = time {
        draft.task_time = parse_time_field(time)?;
    }

    let updated = tasks::update(&api, &session, &mut board, id, &draft).await?;
    println!(
        "{}",
        format!("Updated task {} '{}'", updated.task_id, updated.task_name).green()
    );
    print_counts(&board.counts());
    print_table(board.tasks());
    Ok(())
}

/// Delete a task after confirmation
///
/// `--yes` skips the prompt; a declined prompt aborts without touching the
/// network.
pub async fn run_delete(config: &Config, id: i64, yes: bool) -> Result<()> {
    let api = HttpTaskApi::new(&config.api)?;
    let store = session_store(config)?;
    let session = require_session(&store)?;

    if !yes && !confirm_delete()? {
        println!("{}", "Aborted.".yellow());
        return Ok(());
    }

    // No refetch on delete: the removal is already known client-side.
    let mut board = TaskBoard::new();
    tasks::remove(&api, &session, &mut board, id).await?;

    println!("{}", format!("Deleted task {}", id).green());
    Ok(())
}

/// Toggle a task's completion flag
pub async fn run_toggle(config: &Config, id: i64) -> Result<()> {
    let api = HttpTaskApi::new(&config.api)?;
    let store = session_store(config)?;
    let session = require_session(&store)?;

    let mut board = TaskBoard::new();
    tasks::refresh(&api, &session, &mut board, None).await?;

    let updated = tasks::toggle(&api, &session, &mut board, id).await?;
    let state = if updated.completed {
        "completed".green()
    } else {
        "reopened".yellow()
    };
    println!("Task {} '{}' {}", updated.task_id, updated.task_name, state);
    Ok(())
}

/// Blocking y/N prompt before a delete goes out
fn confirm_delete() -> Result<bool> {
    let mut editor = rustyline::DefaultEditor::new()?;
    let answer = editor
        .readline("Are you sure you want to delete this task? [y/N] ")
        .unwrap_or_default();
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter_prefers_name_when_only_name_given() {
        let filter = parse_filter(Some("groceries"), None).unwrap().unwrap();
        assert_eq!(filter.query_param().0, "task_name");
    }

    #[test]
    fn test_parse_filter_date_only() {
        let filter = parse_filter(None, Some("2026-05-01")).unwrap().unwrap();
        assert_eq!(
            filter.query_param(),
            ("task_date", "2026-05-01".to_string())
        );
    }

    #[test]
    fn test_parse_filter_empty_values_mean_no_filter() {
        assert!(parse_filter(Some("  "), None).unwrap().is_none());
        assert!(parse_filter(None, Some("")).unwrap().is_none());
        assert!(parse_filter(None, None).unwrap().is_none());
    }

    #[test]
    fn test_parse_filter_rejects_bad_date() {
        assert!(parse_filter(None, Some("May 1st")).is_err());
    }

    #[test]
    fn test_parse_date_field() {
        assert_eq!(
            parse_date_field("2026-05-01").unwrap(),
            Some("2026-05-01".to_string())
        );
        assert!(parse_date_field("").unwrap().is_none());
        assert!(parse_date_field("2026-13-01").is_err());
    }

    #[test]
    fn test_parse_time_field() {
        assert_eq!(parse_time_field("14:30").unwrap(), Some("14:30".to_string()));
        assert!(parse_time_field("  ").unwrap().is_none());
        assert!(parse_time_field("25:99").is_err());
        assert!(parse_time_field("2pm").is_err());
    }
}
