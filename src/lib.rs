//! contentdash - social media content analytics client library
//!
//! This library provides the core of the contentdash CLI: a persisted
//! session, a typed facade over the analytics backend, a per-user table
//! store kept in local storage, and the page renderers built on top.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `api`: Remote API facade (`DashboardApi` trait and reqwest client)
//! - `session`: Current user, hydrated from and persisted to local storage
//! - `tables`: User-owned grids with templates and column summaries
//! - `storage`: SQLite-backed key/value storage
//! - `views`: Page renderers and the route guard
//! - `commands`: Command handlers wiring the above together
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use contentdash::api::{DashboardApi, HttpApiClient};
//! use contentdash::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     config.validate()?;
//!
//!     let api = HttpApiClient::new(&config.api)?;
//!     let stats = api.get_summary().await?;
//!     println!("{} items", stats.total_items);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod session;
pub mod storage;
pub mod tables;
pub mod views;

// Re-export commonly used types
pub use api::{DashboardApi, HttpApiClient};
pub use config::Config;
pub use error::{ApiError, DashError, Result};
pub use session::{Session, SessionStore};
pub use tables::{Table, TableStore};

#[cfg(test)]
pub mod test_utils;
