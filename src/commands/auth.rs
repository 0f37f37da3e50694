//! Login, register, logout and whoami handlers

use super::{content, AppContext};
use crate::error::{DashError, Result};
use crate::views::auth::{signed_in, validate_login, validate_register};

/// Sign in with the backend and establish the local session
///
/// The dashboard is appended to the confirmation. If the dashboard cannot be
/// loaded the session is kept and only a warning is shown.
pub async fn login(ctx: &mut AppContext, email: &str, password: &str) -> Result<String> {
    let email = email.trim();
    validate_login(email, password)?;

    ctx.api.login(email, password).await?;
    ctx.sessions.login(email)?;

    Ok(welcome(ctx, email).await)
}

/// Create an account, then sign in as the new user
pub async fn register(
    ctx: &mut AppContext,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<String> {
    let email = email.trim();
    validate_register(email, password, confirm)?;

    ctx.api.register(email, password).await?;
    ctx.sessions.login(email)?;

    Ok(welcome(ctx, email).await)
}

async fn welcome(ctx: &AppContext, email: &str) -> String {
    match content::dashboard(ctx, Default::default(), false).await {
        Ok(page) => format!("{}\n\n{}", signed_in(email), page),
        Err(e) => {
            tracing::warn!("Dashboard unavailable after sign-in: {}", e);
            format!("{}\nDashboard unavailable: {}", signed_in(email), e)
        }
    }
}

/// Forget the session; signing out twice is not an error
pub fn logout(ctx: &mut AppContext) -> Result<String> {
    let was_signed_in = ctx.sessions.current_user().is_some();
    ctx.sessions.logout()?;
    Ok(if was_signed_in {
        "Signed out".to_string()
    } else {
        "Not signed in".to_string()
    })
}

/// Email of the signed-in user
pub fn whoami(ctx: &AppContext) -> Result<String> {
    ctx.sessions
        .current_user()
        .map(|s| s.email.clone())
        .ok_or_else(|| DashError::NotSignedIn.into())
}
