/*!
Command handlers for the CLI

Each handler performs the requests its page needs, hands the results to the
matching renderer in [`crate::views`] and returns the text to print. Route
guarding happens once, in [`dispatch`], before any handler runs:

- `auth`: login, register, logout, whoami
- `content`: dashboard, registry, content detail, compare
- `chat`: one-shot question and interactive session
- `profile`: show, update, avatar upload
- `tables`: local table management
*/

use serde::Serialize;

use crate::api::DashboardApi;
use crate::cli::Commands;
use crate::config::Config;
use crate::error::{DashError, Result};
use crate::session::{Session, SessionStore};
use crate::views::{self, Route};

pub mod auth;
pub mod chat;
pub mod content;
pub mod profile;
pub mod tables;

/// Everything a handler may need: configuration, the session and the backend
pub struct AppContext {
    pub config: Config,
    pub sessions: SessionStore,
    pub api: Box<dyn DashboardApi>,
}

impl AppContext {
    pub fn new(config: Config, sessions: SessionStore, api: Box<dyn DashboardApi>) -> Self {
        Self {
            config,
            sessions,
            api,
        }
    }

    /// The signed-in user, or [`DashError::NotSignedIn`]
    pub fn session(&self) -> Result<&Session> {
        self.sessions
            .current_user()
            .ok_or_else(|| DashError::NotSignedIn.into())
    }
}

/// Run one command and return the text to print
///
/// Protected pages fail with [`DashError::NotSignedIn`] when nobody is
/// signed in; login and register show the dashboard when somebody is.
pub async fn dispatch(ctx: &mut AppContext, command: Commands) -> Result<String> {
    let requested = command.route();
    let shown = requested.resolve(ctx.sessions.current_user());
    if shown != requested {
        tracing::debug!(from = requested.path(), to = shown.path(), "Redirecting");
    }

    match command {
        Commands::Logout => auth::logout(ctx),
        Commands::Whoami => auth::whoami(ctx),
        _ if shown == Route::Login && !requested.is_auth_page() => {
            Err(DashError::NotSignedIn.into())
        }
        _ if shown != requested => {
            let email = ctx.session()?.email.clone();
            let page = content::dashboard(ctx, Default::default(), false).await?;
            Ok(format!("Already signed in as {}\n\n{}", email, page))
        }
        Commands::Login { email, password } => auth::login(ctx, &email, &password).await,
        Commands::Register {
            email,
            password,
            confirm,
        } => auth::register(ctx, &email, &password, &confirm).await,
        Commands::Dashboard {
            network,
            period,
            json,
        } => {
            let filters = views::dashboard::DashboardFilters { network, period };
            content::dashboard(ctx, filters, json).await
        }
        Commands::Registry { platform, json } => {
            content::registry(ctx, platform.as_deref(), json).await
        }
        Commands::Content { id, json } => content::content(ctx, id, json).await,
        Commands::Compare { ids, json } => content::compare(ctx, &ids.join(","), json).await,
        Commands::Chat { query } => match query {
            Some(query) => chat::ask(ctx, &query).await,
            None => chat::run_chat(ctx).await,
        },
        Commands::Settings => Ok(views::settings::render(
            &ctx.config.api.base_url,
            ctx.sessions.storage().path(),
        )),
        Commands::Profile { command } => profile::handle_profile(ctx, command).await,
        Commands::Tables { command } => tables::handle_tables(ctx, command),
    }
}

/// Pretty-printed JSON for `--json` output
pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| DashError::Serialization(e).into())
}
