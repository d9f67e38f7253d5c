//! Client-side validation rules for auth and task input
//!
//! These rules run before any network call and stop at the first failure;
//! each failing rule produces its own user-facing message. The backend
//! remains the source of truth, so the checks here only catch input that
//! would certainly be rejected.

use crate::error::{Result, TaskdeckError};
use regex::Regex;

/// Minimum signup username length (after trimming)
pub const MIN_USERNAME_LEN: usize = 5;

/// Minimum signup password length
pub const MIN_PASSWORD_LEN: usize = 10;

/// Symbols accepted by the password symbol rule
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

fn fail(message: &str) -> TaskdeckError {
    TaskdeckError::Validation(message.to_string())
}

/// Basic `local@domain.tld` shape check
fn is_valid_email(email: &str) -> bool {
    // Matches the permissive shape the signup form accepts; full RFC
    // validation is the backend's problem.
    let re = Regex::new(r"^\S+@\S+\.\S+$").expect("email regex is valid");
    re.is_match(email)
}

/// Validate signup input, applying the rules in fixed order
///
/// Order: username length, email shape, password length, password
/// uppercase, password symbol. The first violated rule's message is
/// returned and nothing further is checked.
pub fn validate_signup(user_name: &str, email: &str, password: &str) -> Result<()> {
    if user_name.trim().chars().count() < MIN_USERNAME_LEN {
        return Err(fail("Username must be at least 5 characters long").into());
    }
    if !is_valid_email(email) {
        return Err(fail("Please enter a valid email address").into());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(fail("Password must be at least 10 characters long").into());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(fail("Password must contain at least one capital letter").into());
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        return Err(fail("Password must contain at least one symbol").into());
    }
    Ok(())
}

/// Require a matching confirmation before a password reset goes out
pub fn validate_reset(new_password: &str, confirm_password: &str) -> Result<()> {
    if new_password != confirm_password {
        return Err(fail("Passwords do not match.").into());
    }
    Ok(())
}

/// Reject empty or whitespace-only task names before create/update
pub fn validate_task_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(fail("Task name can't be empty").into());
    }
    Ok(())
}
