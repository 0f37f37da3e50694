//! Login and register pages
//!
//! Input is checked here, before the facade is called, so an obviously
//! incomplete form never reaches the network.

use crate::error::{DashError, Result};

/// Check the login form
pub fn validate_login(email: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(DashError::Validation("Enter email and password".to_string()).into());
    }
    Ok(())
}

/// Check the registration form
///
/// # Examples
///
/// ```
/// use contentdash::views::auth::validate_register;
///
/// assert!(validate_register("a@b.c", "secret", "secret").is_ok());
/// assert!(validate_register("a@b.c", "secret", "secreT").is_err());
/// ```
pub fn validate_register(email: &str, password: &str, confirm: &str) -> Result<()> {
    validate_login(email, password)?;
    if password != confirm {
        return Err(DashError::Validation("Passwords do not match".to_string()).into());
    }
    Ok(())
}

/// Confirmation shown once a session is established
pub fn signed_in(email: &str) -> String {
    format!("Signed in as {}", email)
}
