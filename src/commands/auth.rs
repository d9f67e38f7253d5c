//! Authentication command handlers
//!
//! Thin wrappers over the auth operations that render colored one-line
//! results for the terminal.

use super::session_store;
use crate::api::HttpTaskApi;
use crate::auth;
use crate::config::Config;
use crate::error::Result;
use colored::Colorize;

/// Log in and persist the session
pub async fn run_login(config: &Config, email: &str, password: &str) -> Result<()> {
    let api = HttpTaskApi::new(&config.api)?;
    let store = session_store(config)?;

    let session = auth::login(&api, &store, email, password).await?;
    println!(
        "{}",
        format!("Login successful! Welcome, {}.", session.user_name).green()
    );
    Ok(())
}

/// Create a new account
///
/// Success leaves the user logged out; signing in is a separate step.
pub async fn run_signup(config: &Config, username: &str, email: &str, password: &str) -> Result<()> {
    let api = HttpTaskApi::new(&config.api)?;

    auth::signup(&api, username, email, password).await?;
    println!("{}", "Sign up successful! You can now log in.".green());
    Ok(())
}

/// Reset an account password
pub async fn run_reset_password(
    config: &Config,
    email: &str,
    new_password: &str,
    confirm_password: &str,
) -> Result<()> {
    let api = HttpTaskApi::new(&config.api)?;

    auth::reset_password(&api, email, new_password, confirm_password).await?;
    println!(
        "{}",
        "Password reset successful! Please login with your new password.".green()
    );
    Ok(())
}

/// Clear the stored session
pub fn run_logout(config: &Config) -> Result<()> {
    let store = session_store(config)?;
    auth::logout(&store)?;
    println!("{}", "Logged out.".green());
    Ok(())
}

/// Show the currently logged-in user, if any
pub fn run_whoami(config: &Config) -> Result<()> {
    let store = session_store(config)?;
    match store.restore() {
        Some(session) => {
            println!(
                "Logged in as {} <{}>",
                session.user_name.cyan(),
                session.email
            );
        }
        None => {
            println!("{}", "Not logged in.".yellow());
        }
    }
    Ok(())
}
