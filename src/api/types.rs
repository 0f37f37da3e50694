//! Wire types exchanged with the analytics backend

use serde::{Deserialize, Serialize};

/// One published piece of content with its metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: i64,
    pub platform: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    /// Ratio in 0..1, shown as a percentage
    pub engagement_rate: f64,
    /// Audience polarity in -1..1
    pub sentiment: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Aggregate snapshot computed by the backend on every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_items: u64,
    pub total_views: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub avg_engagement: f64,
    pub avg_sentiment: f64,
}

/// Account role
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// Profile of a registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub bio: Option<String>,
    /// Server-relative path of the uploaded avatar image
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of `PUT /user/profile`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub email: String,
    pub username: Option<String>,
    pub role: Role,
    pub bio: Option<String>,
}

impl From<&UserProfile> for ProfileUpdate {
    fn from(profile: &UserProfile) -> Self {
        Self {
            email: profile.email.clone(),
            username: profile.username.clone(),
            role: profile.role,
            bio: profile.bio.clone(),
        }
    }
}

/// Body of the login and register requests
#[derive(Debug, Clone, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /compare`
#[derive(Debug, Clone, Serialize)]
pub struct CompareRequest<'a> {
    pub ids: &'a [i64],
}

/// Body of `POST /chat`
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub query: &'a str,
}

/// Reply of `POST /chat`
///
/// `answer` may be missing or null when the model produced nothing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub answer: Option<String>,
}
