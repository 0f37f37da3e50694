//! Dashboard page: overview of the summary statistics
//!
//! The network and period selectors only change what is displayed in the
//! filter bar; the backend returns the same snapshot regardless.

use chrono::{Datelike, Duration, NaiveDate};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

use super::{format_count, format_percent, format_sentiment, format_short};
use crate::api::SummaryStats;

/// Social network selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    All,
    Vk,
    Tg,
    Yt,
    Tt,
    Ig,
}

impl Network {
    pub fn label(self) -> &'static str {
        match self {
            Network::All => "All networks",
            Network::Vk => "VK",
            Network::Tg => "Telegram",
            Network::Yt => "YouTube",
            Network::Tt => "TikTok",
            Network::Ig => "Instagram",
        }
    }
}

/// Reporting period selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    #[value(name = "7d")]
    #[serde(rename = "7d")]
    Last7Days,
    #[value(name = "30d")]
    #[serde(rename = "30d")]
    Last30Days,
    Month,
    Custom,
}

impl Period {
    /// Date range covered by the period, ending on `today`
    ///
    /// A custom period has no picker here and falls back to seven days.
    pub fn range(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let start = match self {
            Period::Last7Days | Period::Custom => today - Duration::days(6),
            Period::Last30Days => today - Duration::days(29),
            Period::Month => today.with_day(1).unwrap_or(today),
        };
        (start, today)
    }

    /// Human-readable range, e.g. `05.03.2025 – 11.03.2025`
    pub fn range_label(self, today: NaiveDate) -> String {
        let (start, end) = self.range(today);
        format!("{} – {}", start.format("%d.%m.%Y"), end.format("%d.%m.%Y"))
    }
}

/// Filter bar state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardFilters {
    pub network: Network,
    pub period: Period,
}

/// Qualitative reading of the average sentiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentBand {
    StronglyNegative,
    MildlyNegative,
    Neutral,
    ModeratelyPositive,
    VeryPositive,
}

impl SentimentBand {
    /// Band for a sentiment value in -1..1
    ///
    /// # Examples
    ///
    /// ```
    /// use contentdash::views::dashboard::SentimentBand;
    ///
    /// assert_eq!(SentimentBand::classify(-0.25), SentimentBand::StronglyNegative);
    /// assert_eq!(SentimentBand::classify(0.3), SentimentBand::Neutral);
    /// assert_eq!(SentimentBand::classify(0.71), SentimentBand::VeryPositive);
    /// ```
    pub fn classify(sentiment: f64) -> Self {
        if sentiment <= -0.25 {
            SentimentBand::StronglyNegative
        } else if sentiment <= 0.1 {
            SentimentBand::MildlyNegative
        } else if sentiment <= 0.4 {
            SentimentBand::Neutral
        } else if sentiment <= 0.7 {
            SentimentBand::ModeratelyPositive
        } else {
            SentimentBand::VeryPositive
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SentimentBand::StronglyNegative => "Strongly negative",
            SentimentBand::MildlyNegative => "Mildly negative",
            SentimentBand::Neutral => "Mostly neutral",
            SentimentBand::ModeratelyPositive => "Moderately positive",
            SentimentBand::VeryPositive => "Very positive",
        }
    }
}

/// Figures derived client-side from a [`SummaryStats`] snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub views_per_item: f64,
    pub likes_per_item: f64,
    pub comments_per_item: f64,
    /// Average engagement in percent, clamped to 0..100
    pub engagement_percent: f64,
    pub sentiment_band: SentimentBand,
    /// Share of views in all activity (views + likes + comments), percent
    pub views_share: f64,
    pub likes_share: f64,
    pub comments_share: f64,
}

impl DashboardMetrics {
    pub fn from_stats(stats: &SummaryStats) -> Self {
        let per_item = |total: u64| {
            if stats.total_items == 0 {
                0.0
            } else {
                total as f64 / stats.total_items as f64
            }
        };

        let activity =
            stats.total_views as f64 + stats.total_likes as f64 + stats.total_comments as f64;
        let share = |part: u64| {
            if activity == 0.0 {
                0.0
            } else {
                part as f64 / activity * 100.0
            }
        };

        Self {
            views_per_item: per_item(stats.total_views),
            likes_per_item: per_item(stats.total_likes),
            comments_per_item: per_item(stats.total_comments),
            engagement_percent: (stats.avg_engagement * 100.0).clamp(0.0, 100.0),
            sentiment_band: SentimentBand::classify(stats.avg_sentiment),
            views_share: share(stats.total_views),
            likes_share: share(stats.total_likes),
            comments_share: share(stats.total_comments),
        }
    }
}

/// Machine-readable dashboard, used for `--json`
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport<'a> {
    pub filters: DashboardFilters,
    pub period_range: String,
    pub stats: &'a SummaryStats,
    pub metrics: DashboardMetrics,
}

impl<'a> DashboardReport<'a> {
    pub fn new(stats: &'a SummaryStats, filters: DashboardFilters, today: NaiveDate) -> Self {
        Self {
            filters,
            period_range: filters.period.range_label(today),
            stats,
            metrics: DashboardMetrics::from_stats(stats),
        }
    }
}

/// Render the dashboard page
pub fn render(stats: &SummaryStats, filters: DashboardFilters, today: NaiveDate) -> String {
    let metrics = DashboardMetrics::from_stats(stats);
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Dashboard".bold()));
    out.push_str(&format!(
        "{} · {}\n\n",
        filters.network.label(),
        filters.period.range_label(today)
    ));

    out.push_str(&format!("{}\n", "Overview".underline()));
    out.push_str(&format!("  Publications   {}\n", format_count(stats.total_items)));
    out.push_str(&format!("  Views          {}\n", format_short(stats.total_views)));
    out.push_str(&format!("  Likes          {}\n", format_short(stats.total_likes)));
    out.push_str(&format!("  Comments       {}\n", format_short(stats.total_comments)));
    out.push_str(&format!(
        "  Engagement     {}\n",
        format_percent(metrics.engagement_percent / 100.0)
    ));
    out.push_str(&format!(
        "  Sentiment      {} ({})\n\n",
        format_sentiment(stats.avg_sentiment),
        metrics.sentiment_band.label()
    ));

    out.push_str(&format!("{}\n", "Per publication".underline()));
    out.push_str(&format!("  Views          {:.1}\n", metrics.views_per_item));
    out.push_str(&format!("  Likes          {:.1}\n", metrics.likes_per_item));
    out.push_str(&format!("  Comments       {:.1}\n\n", metrics.comments_per_item));

    out.push_str(&format!("{}\n", "Activity mix".underline()));
    out.push_str(&format!("  Views          {:.1}%\n", metrics.views_share));
    out.push_str(&format!("  Likes          {:.1}%\n", metrics.likes_share));
    out.push_str(&format!("  Comments       {:.1}%", metrics.comments_share));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> SummaryStats {
        SummaryStats {
            total_items: 4,
            total_views: 10_000,
            total_likes: 800,
            total_comments: 200,
            avg_engagement: 0.1,
            avg_sentiment: 0.55,
        }
    }

    #[test]
    fn test_metrics_per_item_and_shares() {
        let m = DashboardMetrics::from_stats(&stats());
        assert_eq!(m.views_per_item, 2_500.0);
        assert_eq!(m.likes_per_item, 200.0);
        assert_eq!(m.comments_per_item, 50.0);
        assert!((m.views_share - 10_000.0 / 11_000.0 * 100.0).abs() < 1e-9);
        assert!((m.views_share + m.likes_share + m.comments_share - 100.0).abs() < 1e-9);
        assert_eq!(m.sentiment_band, SentimentBand::ModeratelyPositive);
    }

    #[test]
    fn test_metrics_handle_empty_snapshot() {
        let empty = SummaryStats {
            total_items: 0,
            total_views: 0,
            total_likes: 0,
            total_comments: 0,
            avg_engagement: 0.0,
            avg_sentiment: 0.0,
        };
        let m = DashboardMetrics::from_stats(&empty);
        assert_eq!(m.views_per_item, 0.0);
        assert_eq!(m.views_share, 0.0);
    }

    #[test]
    fn test_metrics_with_huge_totals() {
        let huge = SummaryStats {
            total_items: 1,
            total_views: u64::MAX,
            total_likes: u64::MAX,
            total_comments: 1,
            ..stats()
        };
        let m = DashboardMetrics::from_stats(&huge);
        assert!((m.views_share - 50.0).abs() < 1e-6);
        assert!((m.likes_share - 50.0).abs() < 1e-6);
        assert!(m.comments_share >= 0.0 && m.comments_share < 1e-6);
    }

    #[test]
    fn test_engagement_percent_is_clamped() {
        let mut s = stats();
        s.avg_engagement = 1.7;
        assert_eq!(DashboardMetrics::from_stats(&s).engagement_percent, 100.0);
        s.avg_engagement = -0.2;
        assert_eq!(DashboardMetrics::from_stats(&s).engagement_percent, 0.0);
    }

    #[test]
    fn test_sentiment_band_boundaries() {
        assert_eq!(SentimentBand::classify(-1.0), SentimentBand::StronglyNegative);
        assert_eq!(SentimentBand::classify(0.1), SentimentBand::MildlyNegative);
        assert_eq!(SentimentBand::classify(0.4), SentimentBand::Neutral);
        assert_eq!(SentimentBand::classify(0.7), SentimentBand::ModeratelyPositive);
        assert_eq!(SentimentBand::classify(1.0), SentimentBand::VeryPositive);
    }

    #[test]
    fn test_period_ranges() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
        assert_eq!(
            Period::Last7Days.range_label(today),
            "05.03.2025 – 11.03.2025"
        );
        assert_eq!(
            Period::Last30Days.range(today).0,
            NaiveDate::from_ymd_opt(2025, 2, 10).unwrap()
        );
        assert_eq!(
            Period::Month.range(today).0,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert_eq!(Period::Custom.range(today), Period::Last7Days.range(today));
    }

    #[test]
    fn test_render_contains_key_figures() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
        let filters = DashboardFilters {
            network: Network::Yt,
            period: Period::Last7Days,
        };
        let page = render(&stats(), filters, today);
        assert!(page.contains("YouTube"));
        assert!(page.contains("10.0K"));
        assert!(page.contains("10.0%"));
        assert!(page.contains("Moderately positive"));
    }

    #[test]
    fn test_report_serializes_filters() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
        let s = stats();
        let report = DashboardReport::new(&s, DashboardFilters::default(), today);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["filters"]["period"], "7d");
        assert_eq!(json["filters"]["network"], "all");
        assert_eq!(json["metrics"]["sentiment_band"], "moderately_positive");
    }
}
