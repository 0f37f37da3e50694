//! reqwest implementation of the API facade

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;

use super::types::{
    ChatRequest, ChatResponse, CompareRequest, ContentItem, Credentials, ProfileUpdate,
    SummaryStats, UserProfile,
};
use super::DashboardApi;
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult, DashError, Result};

/// HTTP client for the analytics backend
///
/// # Examples
///
/// ```
/// use contentdash::api::HttpApiClient;
/// use contentdash::config::ApiConfig;
///
/// let client = HttpApiClient::new(&ApiConfig::default()).unwrap();
/// assert_eq!(client.base_url(), "http://localhost:8000/api");
/// ```
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    /// Build a client from the API configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("contentdash/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| DashError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        tracing::debug!(base_url = %base_url, "Initialized API client");

        Ok(Self { client, base_url })
    }

    /// Base URL every endpoint path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Request failed before a response arrived: {}", e);
            ApiError::Transport {
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = normalize_error_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());
        tracing::warn!(status = status.as_u16(), "Backend returned error: {}", message);

        Err(ApiError::Http {
            status: status.as_u16(),
            message,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = self.execute(request).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode {
            message: e.to_string(),
        })
    }
}

/// Extract a readable message from a backend error body
///
/// Tries, in order: a string `detail`, a string `message`, the `msg` fields
/// of a `detail` list, and finally the raw body text. Returns `None` for an
/// empty body.
///
/// # Examples
///
/// ```
/// use contentdash::api::client::normalize_error_message;
///
/// assert_eq!(
///     normalize_error_message(r#"{"detail":"User already exists"}"#).as_deref(),
///     Some("User already exists")
/// );
/// assert_eq!(
///     normalize_error_message(r#"{"message":"Bad password"}"#).as_deref(),
///     Some("Bad password")
/// );
/// assert_eq!(normalize_error_message("  ").as_deref(), None);
/// ```
pub fn normalize_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return Some(detail.to_string());
        }
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return Some(message.to_string());
        }
        if let Some(list) = value.get("detail").and_then(|d| d.as_array()) {
            let parts: Vec<&str> = list
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(|m| m.as_str()))
                .collect();
            if !parts.is_empty() {
                return Some(parts.join("; "));
            }
        }
    }

    Some(trimmed.to_string())
}

#[async_trait]
impl DashboardApi for HttpApiClient {
    async fn get_summary(&self) -> ApiResult<SummaryStats> {
        self.fetch(self.client.get(self.url("/stats/summary")))
            .await
    }

    async fn get_content(&self) -> ApiResult<Vec<ContentItem>> {
        self.fetch(self.client.get(self.url("/content"))).await
    }

    async fn get_content_by_id(&self, id: i64) -> ApiResult<ContentItem> {
        self.fetch(self.client.get(self.url(&format!("/content/{}", id))))
            .await
    }

    async fn compare(&self, ids: &[i64]) -> ApiResult<Vec<ContentItem>> {
        if ids.is_empty() {
            return Err(ApiError::Validation {
                message: "at least one content id is required".to_string(),
            });
        }
        tracing::debug!(?ids, "Comparing content items");
        self.fetch(
            self.client
                .post(self.url("/compare"))
                .json(&CompareRequest { ids }),
        )
        .await
    }

    async fn chat(&self, query: &str) -> ApiResult<ChatResponse> {
        self.fetch(self.client.post(self.url("/chat")).json(&ChatRequest { query }))
            .await
    }

    async fn login(&self, email: &str, password: &str) -> ApiResult<()> {
        self.execute(
            self.client
                .post(self.url("/auth/login"))
                .json(&Credentials { email, password }),
        )
        .await?;
        Ok(())
    }

    async fn register(&self, email: &str, password: &str) -> ApiResult<()> {
        self.execute(
            self.client
                .post(self.url("/auth/register"))
                .json(&Credentials { email, password }),
        )
        .await?;
        Ok(())
    }

    async fn get_profile(&self, email: &str) -> ApiResult<UserProfile> {
        self.fetch(
            self.client
                .get(self.url("/user/profile"))
                .query(&[("email", email)]),
        )
        .await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<UserProfile> {
        self.fetch(self.client.put(self.url("/user/profile")).json(update))
            .await
    }

    async fn upload_avatar(&self, email: &str, file: &Path) -> ApiResult<UserProfile> {
        let part = avatar_part(file).await?;
        let form = reqwest::multipart::Form::new().part("file", part);
        self.fetch(
            self.client
                .post(self.url("/user/avatar"))
                .query(&[("email", email)])
                .multipart(form),
        )
        .await
    }
}

/// Read an avatar file and wrap it as a multipart part
///
/// The content is sniffed rather than trusted by extension; anything that is
/// not a recognizable image is rejected before a request is made.
async fn avatar_part(file: &Path) -> ApiResult<reqwest::multipart::Part> {
    let bytes = tokio::fs::read(file)
        .await
        .map_err(|e| ApiError::Validation {
            message: format!("cannot read {}: {}", file.display(), e),
        })?;

    let format = image::guess_format(&bytes).map_err(|_| ApiError::Validation {
        message: format!("{} is not a supported image", file.display()),
    })?;

    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "avatar".to_string());

    reqwest::multipart::Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(format.to_mime_type())
        .map_err(|e| ApiError::Validation {
            message: e.to_string(),
        })
}
