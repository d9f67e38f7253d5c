//! Interactive task dashboard
//!
//! A readline-based loop over the task collection: list, search, add,
//! edit, delete, and toggle, with counts shown after each refresh. The
//! session is restored once at startup and threaded through every call;
//! the board survives failed fetches so the previous list stays visible
//! next to the error banner.

use super::tasks::{parse_date_field, parse_time_field, print_counts, print_table};
use super::{require_session, session_store};
use crate::api::{HttpTaskApi, TaskApi, TaskDraft, TaskFilter};
use crate::auth;
use crate::config::Config;
use crate::error::Result;
use crate::session::Session;
use crate::tasks::{self, TaskBoard};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Commands accepted at the dashboard prompt
#[derive(Debug, Clone, PartialEq)]
enum DashboardCommand {
    List,
    SearchName(String),
    SearchDate(String),
    ClearFilter,
    Add,
    Edit(i64),
    Delete(i64),
    Toggle(i64),
    Stats,
    Whoami,
    Help,
    Logout,
    Exit,
    Unknown(String),
}

/// Parse one line of dashboard input
fn parse_command(line: &str) -> DashboardCommand {
    let mut parts = line.split_whitespace();
    let head = parts.next().unwrap_or_default().to_lowercase();
    let rest: Vec<&str> = parts.collect();

    let parse_id = |args: &[&str]| args.first().and_then(|s| s.parse::<i64>().ok());

    match head.as_str() {
        "list" | "ls" => DashboardCommand::List,
        "search" => match rest.split_first() {
            Some((&"name", query)) if !query.is_empty() => {
                DashboardCommand::SearchName(query.join(" "))
            }
            Some((&"date", query)) if !query.is_empty() => {
                DashboardCommand::SearchDate(query.join(" "))
            }
            _ => DashboardCommand::Unknown(line.to_string()),
        },
        "clear" => DashboardCommand::ClearFilter,
        "add" | "new" => DashboardCommand::Add,
        "edit" => match parse_id(&rest) {
            Some(id) => DashboardCommand::Edit(id),
            None => DashboardCommand::Unknown(line.to_string()),
        },
        "rm" | "delete" => match parse_id(&rest) {
            Some(id) => DashboardCommand::Delete(id),
            None => DashboardCommand::Unknown(line.to_string()),
        },
        "done" | "toggle" => match parse_id(&rest) {
            Some(id) => DashboardCommand::Toggle(id),
            None => DashboardCommand::Unknown(line.to_string()),
        },
        "stats" => DashboardCommand::Stats,
        "whoami" => DashboardCommand::Whoami,
        "help" | "?" => DashboardCommand::Help,
        "logout" => DashboardCommand::Logout,
        "quit" | "exit" => DashboardCommand::Exit,
        _ => DashboardCommand::Unknown(line.to_string()),
    }
}

fn print_banner(session: &Session) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Taskdeck Dashboard - Welcome!                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Logged in as {} <{}>", session.user_name.cyan(), session.email);
    println!("Type 'help' for available commands, 'quit' to exit\n");
}

fn print_help() {
    println!("Available commands:");
    println!("  list                  Fetch and show tasks (with the active filter)");
    println!("  search name <query>   Filter by name substring");
    println!("  search date <date>    Filter by exact date (YYYY-MM-DD)");
    println!("  clear                 Drop the active filter and refetch");
    println!("  add                   Create a task (prompts for fields)");
    println!("  edit <id>             Edit a task (prompts primed with current values)");
    println!("  rm <id>               Delete a task (asks for confirmation)");
    println!("  done <id>             Toggle a task's completion flag");
    println!("  stats                 Show total/upcoming/completed counts");
    println!("  whoami                Show the logged-in user");
    println!("  logout                Clear the session and exit");
    println!("  quit                  Exit without clearing the session");
}

fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "error:".red().bold(), err);
}

/// Prompt for a value, offering the current one as editable initial text
fn prompt_field(rl: &mut DefaultEditor, label: &str, initial: &str) -> Result<String> {
    let line = rl
        .readline_with_initial(label, (initial, ""))
        .unwrap_or_default();
    Ok(line.trim().to_string())
}

/// Collect a task draft interactively
///
/// Existing values (edit) arrive pre-normalized from the board; blank
/// date/time answers mean "no value".
fn prompt_draft(rl: &mut DefaultEditor, initial: &TaskDraft) -> Result<TaskDraft> {
    let task_name = prompt_field(rl, "Task name: ", &initial.task_name)?;
    let location = prompt_field(
        rl,
        "Location: ",
        initial.location_name.as_deref().unwrap_or(""),
    )?;
    let date = prompt_field(
        rl,
        "Date (YYYY-MM-DD): ",
        initial.task_date.as_deref().unwrap_or(""),
    )?;
    let time = prompt_field(
        rl,
        "Time (HH:MM): ",
        initial.task_time.as_deref().unwrap_or(""),
    )?;

    Ok(TaskDraft {
        task_name,
        location_name: if location.is_empty() {
            None
        } else {
            Some(location)
        },
        task_date: parse_date_field(&date)?,
        task_time: parse_time_field(&time)?,
        completed: initial.completed,
    })
}

/// Run the interactive dashboard
pub async fn run_dashboard(config: Config) -> Result<()> {
    tracing::info!("Starting interactive dashboard");

    let api = HttpTaskApi::new(&config.api)?;
    let store = session_store(&config)?;
    let session = require_session(&store)?;

    let mut rl = DefaultEditor::new()?;
    let mut board = TaskBoard::new();
    let mut filter: Option<TaskFilter> = None;

    print_banner(&session);

    // Initial fetch; on failure the dashboard still opens with the banner.
    match tasks::refresh(&api, &session, &mut board, None).await {
        Ok(()) => {
            print_counts(&board.counts());
            print_table(board.tasks());
        }
        Err(e) => print_error(&e),
    }

    let prompt = format!("[{}] >> ", session.user_name.cyan());

    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                rl.add_history_entry(trimmed)?;

                match parse_command(trimmed) {
                    DashboardCommand::List => {
                        refresh_and_render(&api, &session, &mut board, filter.as_ref()).await;
                    }
                    DashboardCommand::SearchName(query) => {
                        filter = TaskFilter::by_name(&query);
                        refresh_and_render(&api, &session, &mut board, filter.as_ref()).await;
                    }
                    DashboardCommand::SearchDate(query) => match TaskFilter::by_date(&query) {
                        Ok(parsed) => {
                            filter = parsed;
                            refresh_and_render(&api, &session, &mut board, filter.as_ref()).await;
                        }
                        Err(e) => print_error(&e),
                    },
                    DashboardCommand::ClearFilter => {
                        filter = None;
                        refresh_and_render(&api, &session, &mut board, None).await;
                    }
                    DashboardCommand::Add => {
                        match prompt_draft(&mut rl, &TaskDraft::default()) {
                            Ok(draft) => {
                                match tasks::create(&api, &session, &mut board, &draft).await {
                                    Ok(created) => {
                                        println!(
                                            "{}",
                                            format!("Created task {}", created.task_id).green()
                                        );
                                        print_counts(&board.counts());
                                        print_table(board.tasks());
                                    }
                                    Err(e) => print_error(&e),
                                }
                            }
                            Err(e) => print_error(&e),
                        }
                    }
                    DashboardCommand::Edit(id) => {
                        let Some(current) = board.get(id).cloned() else {
                            print_error(&anyhow::anyhow!("No task with id {}", id));
                            continue;
                        };
                        match prompt_draft(&mut rl, &current.edit_draft()) {
                            Ok(draft) => {
                                match tasks::update(&api, &session, &mut board, id, &draft).await {
                                    Ok(updated) => {
                                        println!(
                                            "{}",
                                            format!("Updated task {}", updated.task_id).green()
                                        );
                                        print_counts(&board.counts());
                                        print_table(board.tasks());
                                    }
                                    Err(e) => print_error(&e),
                                }
                            }
                            Err(e) => print_error(&e),
                        }
                    }
                    DashboardCommand::Delete(id) => {
                        let answer = rl
                            .readline("Are you sure you want to delete this task? [y/N] ")
                            .unwrap_or_default();
                        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
                            println!("{}", "Aborted.".yellow());
                            continue;
                        }
                        match tasks::remove(&api, &session, &mut board, id).await {
                            Ok(()) => {
                                println!("{}", format!("Deleted task {}", id).green());
                                print_counts(&board.counts());
                                print_table(board.tasks());
                            }
                            Err(e) => print_error(&e),
                        }
                    }
                    DashboardCommand::Toggle(id) => {
                        match tasks::toggle(&api, &session, &mut board, id).await {
                            Ok(updated) => {
                                let state = if updated.completed {
                                    "completed".green()
                                } else {
                                    "reopened".yellow()
                                };
                                println!("Task {} {}", updated.task_id, state);
                                print_counts(&board.counts());
                            }
                            Err(e) => print_error(&e),
                        }
                    }
                    DashboardCommand::Stats => {
                        print_counts(&board.counts());
                    }
                    DashboardCommand::Whoami => {
                        println!(
                            "Logged in as {} <{}>",
                            session.user_name.cyan(),
                            session.email
                        );
                    }
                    DashboardCommand::Help => print_help(),
                    DashboardCommand::Logout => {
                        auth::logout(&store)?;
                        println!("{}", "Logged out.".green());
                        break;
                    }
                    DashboardCommand::Exit => break,
                    DashboardCommand::Unknown(input) => {
                        println!(
                            "{}",
                            format!("Unknown command: '{}'. Type 'help' for a list.", input)
                                .yellow()
                        );
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                tracing::error!("Readline error: {:?}", err);
                break;
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Fetch with the given filter and render; failures keep the previous list
async fn refresh_and_render(
    api: &dyn TaskApi,
    session: &Session,
    board: &mut TaskBoard,
    filter: Option<&TaskFilter>,
) {
    match tasks::refresh(api, session, board, filter).await {
        Ok(()) => {
            print_counts(&board.counts());
            print_table(board.tasks());
        }
        Err(e) => print_error(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_variants() {
        assert_eq!(parse_command("list"), DashboardCommand::List);
        assert_eq!(parse_command("ls"), DashboardCommand::List);
        assert_eq!(parse_command("  LIST  "), DashboardCommand::List);
    }

    #[test]
    fn test_parse_search_name() {
        assert_eq!(
            parse_command("search name buy milk"),
            DashboardCommand::SearchName("buy milk".to_string())
        );
    }

    #[test]
    fn test_parse_search_date() {
        assert_eq!(
            parse_command("search date 2026-05-01"),
            DashboardCommand::SearchDate("2026-05-01".to_string())
        );
    }

    #[test]
    fn test_parse_search_without_query_is_unknown() {
        assert!(matches!(
            parse_command("search name"),
            DashboardCommand::Unknown(_)
        ));
        assert!(matches!(
            parse_command("search"),
            DashboardCommand::Unknown(_)
        ));
    }

    #[test]
    fn test_parse_id_commands() {
        assert_eq!(parse_command("edit 7"), DashboardCommand::Edit(7));
        assert_eq!(parse_command("rm 3"), DashboardCommand::Delete(3));
        assert_eq!(parse_command("delete 3"), DashboardCommand::Delete(3));
        assert_eq!(parse_command("done 9"), DashboardCommand::Toggle(9));
        assert_eq!(parse_command("toggle 9"), DashboardCommand::Toggle(9));
    }

    #[test]
    fn test_parse_id_commands_require_numeric_id() {
        assert!(matches!(
            parse_command("edit abc"),
            DashboardCommand::Unknown(_)
        ));
        assert!(matches!(parse_command("rm"), DashboardCommand::Unknown(_)));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("clear"), DashboardCommand::ClearFilter);
        assert_eq!(parse_command("add"), DashboardCommand::Add);
        assert_eq!(parse_command("new"), DashboardCommand::Add);
        assert_eq!(parse_command("stats"), DashboardCommand::Stats);
        assert_eq!(parse_command("whoami"), DashboardCommand::Whoami);
        assert_eq!(parse_command("help"), DashboardCommand::Help);
        assert_eq!(parse_command("?"), DashboardCommand::Help);
        assert_eq!(parse_command("logout"), DashboardCommand::Logout);
        assert_eq!(parse_command("quit"), DashboardCommand::Exit);
        assert_eq!(parse_command("exit"), DashboardCommand::Exit);
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(matches!(
            parse_command("frobnicate"),
            DashboardCommand::Unknown(_)
        ));
    }
}
