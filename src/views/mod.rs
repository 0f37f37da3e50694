//! View layer
//!
//! Every page is a pure function from store values (plus ephemeral input) to
//! printable text. Nothing here performs I/O; the command handlers fetch the
//! data and hand it to these renderers.

use crate::session::Session;

pub mod auth;
pub mod chat;
pub mod compare;
pub mod dashboard;
pub mod profile;
pub mod registry;
pub mod settings;
pub mod tables;

/// Pages of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Registry,
    Tables,
    Compare,
    Chat,
    Settings,
    Profile,
}

impl Route {
    /// Canonical path of the page
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
            Route::Registry => "/registry",
            Route::Tables => "/tables",
            Route::Compare => "/compare",
            Route::Chat => "/chat",
            Route::Settings => "/settings",
            Route::Profile => "/profile",
        }
    }

    /// Map a path to a page; the root and unknown paths land on the dashboard
    ///
    /// # Examples
    ///
    /// ```
    /// use contentdash::views::Route;
    ///
    /// assert_eq!(Route::from_path("/compare"), Route::Compare);
    /// assert_eq!(Route::from_path("/"), Route::Dashboard);
    /// assert_eq!(Route::from_path("/nowhere"), Route::Dashboard);
    /// ```
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/registry" => Route::Registry,
            "/tables" => Route::Tables,
            "/compare" => Route::Compare,
            "/chat" => Route::Chat,
            "/settings" => Route::Settings,
            "/profile" => Route::Profile,
            _ => Route::Dashboard,
        }
    }

    /// Login and register are reachable only while signed out
    pub fn is_auth_page(self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }

    /// The page actually shown for this request
    ///
    /// Protected pages without a session go to the login page; auth pages
    /// with a session go to the dashboard.
    pub fn resolve(self, session: Option<&Session>) -> Route {
        match (self.is_auth_page(), session.is_some()) {
            (true, true) => Route::Dashboard,
            (false, false) => Route::Login,
            _ => self,
        }
    }
}

/// Group digits in threes with spaces: `1234567` → `1 234 567`
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Compact count: `1.2K`, `3.4M`, plain grouping below a thousand
pub fn format_short(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format_count(n)
    }
}

/// Ratio in 0..1 as a percentage with one decimal
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Sentiment with two decimals
pub fn format_sentiment(sentiment: f64) -> String {
    format!("{:.2}", sentiment)
}
