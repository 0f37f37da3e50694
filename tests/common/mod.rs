use serde_json::{json, Value};
use tempfile::TempDir;
use contentdash::config::ApiConfig;
use contentdash::session::Session;
use contentdash::storage::SqliteStorage;

#[allow(dead_code)]
pub fn create_temp_storage() -> (SqliteStorage, TempDir) {
    let tmp = TempDir::new().expect("failed to create tempdir");
    let db_path = tmp.path().join("contentdash.db");
    let storage =
        SqliteStorage::new_with_path(db_path).expect("failed to create sqlite storage with path");
    (storage, tmp)
}

#[allow(dead_code)]
pub fn session(email: &str) -> Session {
    Session::new(email)
}

/// API configuration pointing at a mock server's `/api` prefix
#[allow(dead_code)]
pub fn api_config(server_uri: &str) -> ApiConfig {
    ApiConfig {
        base_url: format!("{}/api", server_uri),
        timeout_seconds: Some(5),
    }
}

/// Backend representation of a content item
#[allow(dead_code)]
pub fn content_json(id: i64, platform: &str) -> Value {
    json!({
        "id": id,
        "platform": platform,
        "title": format!("Post {}", id),
        "author": "editorial",
        "url": format!("https://example.com/content/{}", id),
        "views": 1000 * id,
        "likes": 50 * id,
        "comments": 5 * id,
        "engagement_rate": 0.055,
        "sentiment": 0.3,
        "tags": ["launch"],
        "published_at": "2025-03-01"
    })
}

#[allow(dead_code)]
pub fn summary_json() -> Value {
    json!({
        "total_items": 4,
        "total_views": 12400,
        "total_likes": 930,
        "total_comments": 118,
        "avg_engagement": 0.0845,
        "avg_sentiment": 0.42
    })
}

/// PNG signature followed by an IHDR chunk header; enough for format sniffing
#[allow(dead_code)]
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89,
];
