//! Compare page

use colored::Colorize;
use prettytable::{format, row, Table};
use regex::Regex;
use std::sync::OnceLock;

use super::{format_count, format_percent, format_sentiment};
use crate::api::ContentItem;

fn separators() -> &'static Regex {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    SEPARATORS.get_or_init(|| Regex::new(r"[,;\s]+").expect("valid separator pattern"))
}

/// Parse a free-text list of content ids
///
/// Ids may be separated by commas, semicolons or whitespace. Tokens that are
/// not positive integers are dropped.
///
/// # Examples
///
/// ```
/// use contentdash::views::compare::parse_id_list;
///
/// assert_eq!(parse_id_list("1, 2 ,x,3"), vec![1, 2, 3]);
/// assert_eq!(parse_id_list("0, -4, abc"), Vec::<i64>::new());
/// ```
pub fn parse_id_list(input: &str) -> Vec<i64> {
    separators()
        .split(input.trim())
        .filter_map(|token| token.parse::<i64>().ok())
        .filter(|id| *id > 0)
        .collect()
}

/// Shown when the input contains no usable id
pub const NO_VALID_IDS: &str = "Enter at least one valid content id, e.g. 1, 2, 3";

/// Side-by-side metrics of the selected items
pub fn render(items: &[ContentItem]) -> String {
    if items.is_empty() {
        return "None of the requested items exist.".yellow().to_string();
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row![
        "ID", "Platform", "Title", "Views", "Likes", "Comments", "ER", "Sentiment"
    ]);

    for item in items {
        table.add_row(row![
            item.id,
            item.platform,
            item.title,
            format_count(item.views),
            format_count(item.likes),
            format_count(item.comments),
            format_percent(item.engagement_rate),
            format_sentiment(item.sentiment)
        ]);
    }

    let mut out = format!("{}\n", "Compare".bold());
    out.push_str(&table.to_string());
    if let Some(best) = items
        .iter()
        .max_by(|a, b| a.engagement_rate.total_cmp(&b.engagement_rate))
    {
        out.push_str(&format!(
            "Highest engagement: {} (#{}, {})",
            best.title.cyan(),
            best.id,
            format_percent(best.engagement_rate)
        ));
    }
    out
}
