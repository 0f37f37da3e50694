//! Content registry page and content detail view

use colored::Colorize;
use prettytable::{format, row, Table};

use super::{format_count, format_percent, format_sentiment};
use crate::api::ContentItem;

/// Keep only items of `platform` (case-insensitive); `None` keeps everything
pub fn filter_by_platform<'a>(
    items: &'a [ContentItem],
    platform: Option<&str>,
) -> Vec<&'a ContentItem> {
    match platform.map(str::trim).filter(|p| !p.is_empty()) {
        Some(platform) => items
            .iter()
            .filter(|item| item.platform.eq_ignore_ascii_case(platform))
            .collect(),
        None => items.iter().collect(),
    }
}

/// Render the registry table
pub fn render_list(items: &[&ContentItem]) -> String {
    if items.is_empty() {
        return "No content found.".yellow().to_string();
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row!["ID", "Platform", "Title", "Views", "ER", "Sentiment"]);

    for item in items {
        table.add_row(row![
            item.id,
            item.platform,
            item.title,
            format_count(item.views),
            format_percent(item.engagement_rate),
            format_sentiment(item.sentiment)
        ]);
    }

    format!(
        "{} ({} items)\n{}",
        "Content registry".bold(),
        items.len(),
        table
    )
}

/// Render one content item in full
pub fn render_detail(item: &ContentItem) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", format!("#{}", item.id).cyan(), item.title.bold()));
    out.push_str(&format!("  Platform    {}\n", item.platform));
    out.push_str(&format!("  Author      {}\n", item.author));
    out.push_str(&format!("  URL         {}\n", item.url));
    if let Some(published) = &item.published_at {
        out.push_str(&format!("  Published   {}\n", published));
    }
    if let Some(status) = &item.status {
        out.push_str(&format!("  Status      {}\n", status));
    }
    out.push_str(&format!("  Views       {}\n", format_count(item.views)));
    out.push_str(&format!("  Likes       {}\n", format_count(item.likes)));
    out.push_str(&format!("  Comments    {}\n", format_count(item.comments)));
    out.push_str(&format!("  Engagement  {}\n", format_percent(item.engagement_rate)));
    out.push_str(&format!("  Sentiment   {}", format_sentiment(item.sentiment)));
    if !item.tags.is_empty() {
        out.push_str(&format!("\n  Tags        {}", item.tags.join(", ")));
    }
    out
}
