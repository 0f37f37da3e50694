//! Built-in table templates

use clap::ValueEnum;

/// Predefined header sets for new tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableTemplate {
    /// Publishing schedule
    ContentPlan,
    /// Week-by-week reach and engagement
    WeeklyKpi,
    /// Content experiments with before/after metrics
    Experiments,
}

impl TableTemplate {
    /// Name given to a table created from this template
    pub fn name(self) -> &'static str {
        match self {
            TableTemplate::ContentPlan => "Content plan",
            TableTemplate::WeeklyKpi => "Weekly KPI",
            TableTemplate::Experiments => "Experiments",
        }
    }

    /// Header row of the template
    pub fn headers(self) -> Vec<String> {
        let headers: &[&str] = match self {
            TableTemplate::ContentPlan => &[
                "Date", "Platform", "Format", "Topic", "Status", "Owner", "Link",
            ],
            TableTemplate::WeeklyKpi => &["Week", "Views", "Likes", "Comments", "CTR, %", "Notes"],
            TableTemplate::Experiments => &[
                "Hypothesis",
                "Content type",
                "Period",
                "Metric before",
                "Metric after",
                "Conclusion",
            ],
        };
        headers.iter().map(|h| h.to_string()).collect()
    }
}
