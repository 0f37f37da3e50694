//! Remote API facade
//!
//! One operation per backend capability, each a direct request/response
//! pair: no caching, no retries, no batching. [`DashboardApi`] is the seam
//! the commands talk to; [`HttpApiClient`] is the reqwest implementation.
//!
//! Every operation returns [`ApiResult`], so failures arrive as the tagged
//! [`ApiError`](crate::error::ApiError) with its message already normalized.

use async_trait::async_trait;
use std::path::Path;

use crate::error::ApiResult;

pub mod client;
pub mod types;

pub use client::HttpApiClient;
pub use types::{ChatResponse, ContentItem, ProfileUpdate, Role, SummaryStats, UserProfile};

/// Operations offered by the analytics backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// `GET /stats/summary`
    async fn get_summary(&self) -> ApiResult<SummaryStats>;

    /// `GET /content`
    async fn get_content(&self) -> ApiResult<Vec<ContentItem>>;

    /// `GET /content/{id}`
    async fn get_content_by_id(&self, id: i64) -> ApiResult<ContentItem>;

    /// `POST /compare`
    ///
    /// Fails with a validation error, without sending anything, when `ids`
    /// is empty.
    async fn compare(&self, ids: &[i64]) -> ApiResult<Vec<ContentItem>>;

    /// `POST /chat`
    async fn chat(&self, query: &str) -> ApiResult<ChatResponse>;

    /// `POST /auth/login`
    async fn login(&self, email: &str, password: &str) -> ApiResult<()>;

    /// `POST /auth/register`
    async fn register(&self, email: &str, password: &str) -> ApiResult<()>;

    /// `GET /user/profile?email=`
    async fn get_profile(&self, email: &str) -> ApiResult<UserProfile>;

    /// `PUT /user/profile`
    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<UserProfile>;

    /// `POST /user/avatar?email=` with a multipart `file` part
    async fn upload_avatar(&self, email: &str, file: &Path) -> ApiResult<UserProfile>;
}
