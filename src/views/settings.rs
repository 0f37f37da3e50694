//! Settings page

use colored::Colorize;
use std::path::Path;

/// Connection state of a data source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceStatus {
    Connected,
    Planned,
    InUse,
}

impl SourceStatus {
    pub fn label(self) -> &'static str {
        match self {
            SourceStatus::Connected => "connected (mock)",
            SourceStatus::Planned => "planned",
            SourceStatus::InUse => "in use",
        }
    }
}

/// A data source the dashboard reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSource {
    pub name: &'static str,
    pub status: SourceStatus,
}

/// Known data sources
pub const DATA_SOURCES: [DataSource; 3] = [
    DataSource {
        name: "YouTube Analytics",
        status: SourceStatus::Connected,
    },
    DataSource {
        name: "Telegram",
        status: SourceStatus::Planned,
    },
    DataSource {
        name: "MWS Tables",
        status: SourceStatus::InUse,
    },
];

/// Render the settings page with the effective connection details
pub fn render(api_base: &str, storage_path: &Path) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Settings".bold()));
    out.push_str(&format!("\n{}\n", "Data sources".underline()));
    for source in DATA_SOURCES {
        let status = match source.status {
            SourceStatus::Connected | SourceStatus::InUse => source.status.label().green(),
            SourceStatus::Planned => source.status.label().yellow(),
        };
        out.push_str(&format!("  {:<20} {}\n", source.name, status));
    }
    out.push_str(&format!("\n{}\n", "Connection".underline()));
    out.push_str(&format!("  API base URL  {}\n", api_base));
    out.push_str(&format!("  Local storage {}", storage_path.display()));
    out
}
