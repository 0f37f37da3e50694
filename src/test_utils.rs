//! Test utilities for contentdash
//!
//! Temporary storage, sample backend payloads and assertion helpers shared
//! by the unit tests.

use crate::api::{ContentItem, Role, SummaryStats, UserProfile};
use crate::error::Result;
use crate::storage::SqliteStorage;
use tempfile::TempDir;

/// Create a temporary directory for testing
///
/// # Returns
///
/// Returns a TempDir that will be cleaned up when dropped
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Create a storage backed by a database inside a fresh temporary directory
///
/// The `TempDir` must be kept alive for as long as the storage is used.
pub fn temp_storage() -> (SqliteStorage, TempDir) {
    let dir = temp_dir();
    let storage = SqliteStorage::new_with_path(dir.path().join("contentdash.db"))
        .expect("Failed to create storage");
    (storage, dir)
}

/// A content item with plausible metrics
pub fn content_item(id: i64, platform: &str) -> ContentItem {
    ContentItem {
        id,
        platform: platform.to_string(),
        title: format!("Post {}", id),
        author: "editorial".to_string(),
        url: format!("https://example.com/content/{}", id),
        views: 1_000 * id as u64,
        likes: 50 * id as u64,
        comments: 5 * id as u64,
        engagement_rate: 0.055,
        sentiment: 0.3,
        tags: Vec::new(),
        published_at: None,
        status: None,
    }
}

/// A summary snapshot with four items
pub fn summary_stats() -> SummaryStats {
    SummaryStats {
        total_items: 4,
        total_views: 12_400,
        total_likes: 930,
        total_comments: 118,
        avg_engagement: 0.0845,
        avg_sentiment: 0.42,
    }
}

/// A profile for `email` with only the required fields set
pub fn profile(email: &str) -> UserProfile {
    UserProfile {
        email: email.to_string(),
        username: None,
        role: Role::User,
        bio: None,
        avatar_url: None,
        created_at: None,
    }
}

/// Assert that an error contains the expected message
///
/// # Panics
///
/// Panics if the result is Ok or if the error doesn't contain the expected message
pub fn assert_error_contains<T>(result: Result<T>, expected: &str) {
    match result {
        Ok(_) => panic!("Expected error containing '{}' but got Ok", expected),
        Err(e) => {
            let error_msg = e.to_string();
            assert!(
                error_msg.contains(expected),
                "Error message '{}' does not contain '{}'",
                error_msg,
                expected
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashError;

    #[test]
    fn test_temp_storage_is_usable() {
        let (storage, _dir) = temp_storage();
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_assert_error_contains_success() {
        let result: Result<()> = Err(DashError::Validation("test error message".into()).into());
        assert_error_contains(result, "test error");
    }

    #[test]
    #[should_panic(expected = "Expected error containing")]
    fn test_assert_error_contains_ok() {
        assert_error_contains(Ok(()), "error");
    }

    #[test]
    #[should_panic(expected = "does not contain")]
    fn test_assert_error_contains_wrong_message() {
        let result: Result<()> = Err(DashError::Validation("different error".into()).into());
        assert_error_contains(result, "not present");
    }
}
