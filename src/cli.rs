//! Command-line interface definition for Taskdeck
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for authentication, task management, and the
//! interactive dashboard.

use clap::{Parser, Subcommand};

/// Taskdeck - task manager client CLI
///
/// Authenticate against a remote task backend and create, list, search,
/// edit, toggle, and delete your tasks.
#[derive(Parser, Debug, Clone)]
#[command(name = "taskdeck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Override the backend API base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Override the session file path
    #[arg(long)]
    pub session_file: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Taskdeck
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Log in and store the session
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },

    /// Create a new account
    Signup {
        /// Desired username (at least 5 characters)
        #[arg(short, long)]
        username: String,

        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password (at least 10 characters, one capital, one symbol)
        #[arg(short, long)]
        password: String,
    },

    /// Reset an account password
    ResetPassword {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// New password
        #[arg(long)]
        new_password: String,

        /// Confirmation of the new password
        #[arg(long)]
        confirm_password: String,
    },

    /// Clear the stored session
    Logout,

    /// Show the currently logged-in user
    Whoami,

    /// Manage tasks
    Tasks {
        /// Task subcommand
        #[command(subcommand)]
        command: TaskCommand,
    },

    /// Start the interactive task dashboard
    Dashboard,
}

/// Task management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum TaskCommand {
    /// List tasks, optionally filtered by name or date
    List {
        /// Filter by name substring
        #[arg(short, long, conflicts_with = "date")]
        name: Option<String>,

        /// Filter by exact date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Emit the raw task array as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new task
    Add {
        /// Task name
        #[arg(short, long)]
        name: String,

        /// Location
        #[arg(short, long)]
        location: Option<String>,

        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Time (HH:MM)
        #[arg(short, long)]
        time: Option<String>,
    },

    /// Edit an existing task
    Edit {
        /// Task identifier
        id: i64,

        /// New task name
        #[arg(short, long)]
        name: Option<String>,

        /// New location
        #[arg(short, long)]
        location: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// New time (HH:MM)
        #[arg(short, long)]
        time: Option<String>,
    },

    /// Delete a task
    Delete {
        /// Task identifier
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Toggle a task's completion flag
    Toggle {
        /// Task identifier
        id: i64,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            api_url: None,
            session_file: None,
            verbose: false,
            command: Commands::Whoami,
        }
    }
}
