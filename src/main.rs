//! contentdash - social media content analytics CLI
//!
#![doc = "contentdash - social media content analytics CLI"]
#![doc = "Main entry point for the contentdash application."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use contentdash::api::HttpApiClient;
use contentdash::cli::Cli;
use contentdash::commands::{self, AppContext};
use contentdash::config::Config;
use contentdash::session::SessionStore;
use contentdash::storage::SqliteStorage;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    let storage = match &config.storage.db_path {
        Some(path) => SqliteStorage::new_with_path(path)?,
        None => SqliteStorage::new()?,
    };
    tracing::debug!("Using storage at {}", storage.path().display());

    let sessions = SessionStore::hydrate(storage)?;
    let api = HttpApiClient::new(&config.api)?;
    let mut ctx = AppContext::new(config, sessions, Box::new(api));

    let output = commands::dispatch(&mut ctx, cli.command).await?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

/// Initialize tracing subscriber with environment filter
///
/// Logs go to stderr so page output and JSON on stdout stay clean.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "contentdash=debug"
    } else {
        "contentdash=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
