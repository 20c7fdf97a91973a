pub mod error;
pub mod types;

pub use error::{ClientError, Result};
pub use types::{HealthStatus, RawPost, RawPostId};

use reqwest::header;
use serde_json::Value;

pub struct FbReaperClient {
    client: reqwest::Client,
    base_url: String,
}

impl FbReaperClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe backend health. Non-2xx is an error, not a "down" status;
    /// the caller decides what a healthy body looks like.
    pub async fn fetch_health(&self) -> Result<HealthStatus> {
        let url = format!("{}/api/health", self.base_url);
        let resp = self
            .client
            .get(&url)
            .header(header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(ClientError::RequestFailed("Health check failed"));
        }

        let health: HealthStatus = resp.json().await?;
        Ok(health)
    }

    /// Fetch the scraped posts. The backend is expected to return a JSON
    /// array of ragged post records; a non-array body yields an empty list.
    pub async fn fetch_posts(&self) -> Result<Vec<RawPost>> {
        let url = format!("{}/api/data/posts", self.base_url);
        let resp = self
            .client
            .get(&url)
            .header(header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(ClientError::RequestFailed("Failed to fetch posts"));
        }

        let body: Value = resp.json().await?;
        parse_posts_body(body)
    }
}

/// Decode the posts payload. Kept separate from the transport so the
/// non-array fallback is testable without a server.
pub fn parse_posts_body(body: Value) -> Result<Vec<RawPost>> {
    match body {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(ClientError::from))
            .collect(),
        _ => {
            tracing::warn!("Posts endpoint returned a non-array body, treating as empty");
            Ok(Vec::new())
        }
    }
}
