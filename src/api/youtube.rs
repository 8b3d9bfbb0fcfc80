//! YouTube Data API search client
//!
//! Looks up tutorial videos by free-text query. Only the video ids are used.
//! API docs: https://developers.google.com/youtube/v3/docs/search/list

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Candidates requested per lookup
const MAX_RESULTS: u8 = 5;

#[derive(Error, Debug)]
pub enum YoutubeError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned status {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// YouTube search client
#[derive(Debug, Clone)]
pub struct YoutubeClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl YoutubeClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Video ids matching `query`, best match first
    pub async fn search_video_ids(&self, query: &str) -> Result<Vec<String>, YoutubeError> {
        let url = format!(
            "{}/search?part=snippet&type=video&maxResults={}&q={}&key={}",
            self.base_url,
            MAX_RESULTS,
            urlencoding::encode(query),
            urlencoding::encode(&self.api_key)
        );
        tracing::debug!(query, "youtube search");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(YoutubeError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)
            .map_err(|e| YoutubeError::InvalidResponse(format!("JSON parse error: {}", e)))?;

        Ok(parsed
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ItemId,
}

#[derive(Debug, Deserialize)]
struct ItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}
