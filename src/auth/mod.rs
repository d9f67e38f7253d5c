//! Authentication operations
//!
//! Login, signup, and password reset against the backend, with client-side
//! validation applied before any network call. The session store is the
//! single owner of persistence: `login` is the only operation that writes a
//! session, `logout` the only one that removes it.

pub mod validate;

pub use validate::{validate_reset, validate_signup, validate_task_name};

use crate::api::{SignupRequest, TaskApi};
use crate::error::Result;
use crate::session::{Session, SessionStore};

/// Log in and persist the resulting session
///
/// On success the returned session has already been written to the store.
pub async fn login(
    api: &dyn TaskApi,
    store: &SessionStore,
    email: &str,
    password: &str,
) -> Result<Session> {
    let session = api.login(email, password).await?;
    store.save(&session)?;
    tracing::info!("Logged in as {}", session.user_name);
    Ok(session)
}

/// Register a new account
///
/// The five validation rules run in fixed order before the request goes
/// out; the first violation aborts with its message and no network call is
/// made. Success does not log the user in.
pub async fn signup(
    api: &dyn TaskApi,
    user_name: &str,
    email: &str,
    password: &str,
) -> Result<()> {
    validate_signup(user_name, email, password)?;

    let request = SignupRequest {
        user_name: user_name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };
    api.signup(&request).await?;
    tracing::info!("Account created for {}", email);
    Ok(())
}

/// Reset an account password
///
/// Requires the confirmation to match before any network call.
pub async fn reset_password(
    api: &dyn TaskApi,
    email: &str,
    new_password: &str,
    confirm_password: &str,
) -> Result<()> {
    validate_reset(new_password, confirm_password)?;
    api.reset_password(email, new_password).await?;
    tracing::info!("Password reset for {}", email);
    Ok(())
}

/// Clear the persisted session
pub fn logout(store: &SessionStore) -> Result<()> {
    store.clear()?;
    tracing::info!("Logged out");
    Ok(())
}
