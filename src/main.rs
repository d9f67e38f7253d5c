//! Taskdeck - task manager client CLI
//!
//! Main entry point for the Taskdeck client application.

use anyhow::Result;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use taskdeck::cli::{Cli, Commands, TaskCommand};
use taskdeck::commands;
use taskdeck::config::Config;
use taskdeck::session::SESSION_FILE_ENV;

#[tokio::main]
async fn main() {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse_args();

    // If the user supplied a session file on the CLI, mirror it into
    // TASKDECK_SESSION_FILE so the store initializer can pick it up. This
    // keeps callers unchanged while allowing `SessionStore::new()` to honor
    // an override.
    if let Some(session_file) = &cli.session_file {
        std::env::set_var(SESSION_FILE_ENV, session_file);
        tracing::debug!("Using session file override from CLI: {}", session_file);
    }

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Login { email, password } => {
            tracing::info!("Starting login for {}", email);
            commands::auth::run_login(&config, &email, &password).await
        }
        Commands::Signup {
            username,
            email,
            password,
        } => {
            tracing::info!("Starting signup for {}", email);
            commands::auth::run_signup(&config, &username, &email, &password).await
        }
        Commands::ResetPassword {
            email,
            new_password,
            confirm_password,
        } => {
            tracing::info!("Starting password reset for {}", email);
            commands::auth::run_reset_password(&config, &email, &new_password, &confirm_password)
                .await
        }
        Commands::Logout => commands::auth::run_logout(&config),
        Commands::Whoami => commands::auth::run_whoami(&config),
        Commands::Tasks { command } => match command {
            TaskCommand::List { name, date, json } => {
                commands::tasks::run_list(&config, name.as_deref(), date.as_deref(), json).await
            }
            TaskCommand::Add {
                name,
                location,
                date,
                time,
            } => {
                commands::tasks::run_add(
                    &config,
                    &name,
                    location.as_deref(),
                    date.as_deref(),
                    time.as_deref(),
                )
                .await
            }
            TaskCommand::Edit {
                id,
                name,
                location,
                date,
                time,
            } => {
                commands::tasks::run_edit(
                    &config,
                    id,
                    name.as_deref(),
                    location.as_deref(),
                    date.as_deref(),
                    time.as_deref(),
                )
                .await
            }
            TaskCommand::Delete { id, yes } => {
                commands::tasks::run_delete(&config, id, yes).await
            }
            TaskCommand::Toggle { id } => commands::tasks::run_toggle(&config, id).await,
        },
        Commands::Dashboard => commands::dashboard::run_dashboard(config).await,
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskdeck=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
