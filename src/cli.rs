//! Command-line interface definition for contentdash
//!
//! This module defines the CLI structure using clap's derive API. Each
//! subcommand corresponds to one page of the dashboard (or one action on
//! a page).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::api::Role;
use crate::tables::{TableTemplate, DEFAULT_COLS, DEFAULT_ROWS};
use crate::views::dashboard::{Network, Period};
use crate::views::Route;

/// contentdash - social media content analytics in the terminal
///
/// Browse engagement metrics from the analytics backend, compare
/// publications, ask the AI assistant and keep personal planning tables.
#[derive(Parser, Debug, Clone)]
#[command(name = "contentdash")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Override the backend API base URL
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Override the local storage database path
    #[arg(long, global = true)]
    pub storage_db: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for contentdash
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long, env = "CONTENTDASH_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create an account and sign in
    Register {
        #[arg(short, long)]
        email: String,

        #[arg(short, long, env = "CONTENTDASH_PASSWORD", hide_env_values = true)]
        password: String,

        /// Password confirmation, must match --password
        #[arg(long)]
        confirm: String,
    },

    /// Sign out and forget the session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Overview of engagement, sentiment and activity
    Dashboard {
        #[arg(short, long, value_enum, default_value_t = Network::All)]
        network: Network,

        #[arg(short, long, value_enum, default_value_t = Period::Last7Days)]
        period: Period,

        /// Print JSON instead of a formatted page
        #[arg(long)]
        json: bool,
    },

    /// List all content items
    Registry {
        /// Only show items of this platform
        #[arg(long)]
        platform: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Show one content item
    Content {
        /// Content id
        id: i64,

        #[arg(long)]
        json: bool,
    },

    /// Compare content items side by side
    Compare {
        /// Content ids, separated by spaces or commas
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        #[arg(long)]
        json: bool,
    },

    /// Ask the AI assistant; without --query starts an interactive session
    Chat {
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Data sources and connection details
    Settings,

    /// View or edit the profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },

    /// Manage personal tables
    Tables {
        #[command(subcommand)]
        command: TablesCommand,
    },
}

impl Commands {
    /// Page this command belongs to
    pub fn route(&self) -> Route {
        match self {
            Commands::Login { .. } => Route::Login,
            Commands::Register { .. } => Route::Register,
            Commands::Logout | Commands::Whoami => Route::Dashboard,
            Commands::Dashboard { .. } => Route::Dashboard,
            Commands::Registry { .. } | Commands::Content { .. } => Route::Registry,
            Commands::Compare { .. } => Route::Compare,
            Commands::Chat { .. } => Route::Chat,
            Commands::Settings => Route::Settings,
            Commands::Profile { .. } => Route::Profile,
            Commands::Tables { .. } => Route::Tables,
        }
    }
}

/// Profile subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ProfileCommand {
    /// Show the profile
    Show {
        #[arg(long)]
        json: bool,
    },

    /// Change profile fields; an empty value clears username or bio
    Update {
        #[arg(long)]
        username: Option<String>,

        #[arg(long, value_enum)]
        role: Option<Role>,

        #[arg(long)]
        bio: Option<String>,
    },

    /// Upload an avatar image (PNG, JPEG, GIF or WebP)
    Avatar {
        /// Path to the image file
        file: PathBuf,
    },
}

/// Table subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum TablesCommand {
    /// List tables
    List {
        #[arg(long)]
        json: bool,
    },

    /// Show a table with its summary; defaults to the selected table
    Show {
        id: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Create an empty table
    New {
        #[arg(long, default_value_t = DEFAULT_ROWS)]
        rows: usize,

        #[arg(long, default_value_t = DEFAULT_COLS)]
        cols: usize,
    },

    /// Create a table from a template
    Template {
        #[arg(value_enum)]
        kind: TableTemplate,
    },

    /// Rename a table
    Rename { id: String, name: String },

    /// Set one cell (row and column are zero-based, row 0 is the header)
    Set {
        id: String,
        row: usize,
        col: usize,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Append an empty row
    AddRow { id: String },

    /// Remove the last row (a table keeps at least one)
    RemoveRow { id: String },

    /// Append an empty column
    AddColumn { id: String },

    /// Remove the last column (a table keeps at least one)
    RemoveColumn { id: String },

    /// Delete a table
    Delete { id: String },

    /// Make a table the selected one
    Select { id: String },

    /// Sum and average of every numeric column
    Summary {
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// Discard every stored table, including an unreadable list
    Reset {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
