//! Video catalog adapter.
//!
//! Fetches the editorial channel's video list from the channel data service.
//! The request is a POST with the channel name in the body. Records missing
//! a string title or url are dropped silently; a malformed entry must never
//! fail the whole catalog.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::PlatformDataError;
use crate::models::VideoRecord;

const BASE_URL: &str = "https://yt-channel-data.onrender.com";

/// Channel the dashboard ships with.
pub const DEFAULT_CHANNEL: &str = "TLE_Eliminators";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
struct ChannelRequest<'a> {
    channel_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChannelResponse {
    videos: Vec<serde_json::Value>,
}

pub struct VideoCatalogProvider {
    client: Client,
    base_url: String,
    channel_name: String,
}

impl VideoCatalogProvider {
    pub fn new() -> Self {
        Self::for_channel(DEFAULT_CHANNEL)
    }

    pub fn for_channel(channel_name: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: BASE_URL.to_string(),
            channel_name: channel_name.into(),
        }
    }

    pub fn channel_name(&self) -> &str {
        &self.channel_name
    }

    /// Fetch the full video catalog for the configured channel.
    ///
    /// Returns the valid records in feed order. Entries that are not objects
    /// with string `title` and `url` fields are skipped.
    pub async fn fetch_catalog(&self) -> Result<Vec<VideoRecord>, PlatformDataError> {
        let url = format!("{}/videos", self.base_url);
        log::debug!("Fetching video catalog for channel '{}'", self.channel_name);

        let response = self
            .client
            .post(&url)
            .json(&ChannelRequest {
                channel_name: &self.channel_name,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PlatformDataError::SourceError {
                origin: "youtube".to_string(),
                message: format!("channel data service returned {}", response.status()),
            });
        }

        let body: ChannelResponse =
            response
                .json()
                .await
                .map_err(|e| PlatformDataError::MalformedPayload {
                    origin: "youtube".to_string(),
                    message: e.to_string(),
                })?;

        Ok(Self::filter_valid(body.videos))
    }

    fn filter_valid(raw: Vec<serde_json::Value>) -> Vec<VideoRecord> {
        let total = raw.len();
        let videos: Vec<VideoRecord> = raw
            .into_iter()
            .filter_map(|value| serde_json::from_value::<VideoRecord>(value).ok())
            .filter(|v| !v.title.is_empty() && !v.url.is_empty())
            .collect();

        if videos.len() < total {
            log::debug!(
                "Dropped {} malformed video records out of {}",
                total - videos.len(),
                total
            );
        }
        videos
    }
}

impl Default for VideoCatalogProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_keeps_valid_records_in_order() {
        let raw = vec![
            json!({"title": "CodeChef Starters 173 Full Solution", "url": "https://youtu.be/a"}),
            json!({"title": "Round 950 Div 3 Solutions", "url": "https://youtu.be/b"}),
        ];
        let videos = VideoCatalogProvider::filter_valid(raw);
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].title, "CodeChef Starters 173 Full Solution");
        assert_eq!(videos[1].url, "https://youtu.be/b");
    }

    #[test]
    fn test_filter_drops_malformed_records_silently() {
        let raw = vec![
            json!({"title": "Valid", "url": "https://youtu.be/a"}),
            json!({"title": "Missing url"}),
            json!({"title": 42, "url": "https://youtu.be/c"}),
            json!("not an object"),
            json!({"title": "", "url": "https://youtu.be/d"}),
        ];
        let videos = VideoCatalogProvider::filter_valid(raw);
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title, "Valid");
    }

    #[test]
    fn test_default_channel() {
        let provider = VideoCatalogProvider::new();
        assert_eq!(provider.channel_name(), "TLE_Eliminators");
    }
}
