//! Codeforces rating adapter.
//!
//! Fetches a user's rating change list from the public Codeforces API
//! (`user.rating`). The API wraps results in a status envelope: a handle the
//! site does not know comes back as `status: "FAILED"` with a comment, which
//! this adapter maps to `InvalidHandle`.
//!
//! History is re-sorted newest first at ingestion regardless of the order
//! the API returns.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::errors::PlatformDataError;
use crate::models::{ContestResult, Platform, RatingRecord};
use crate::provider::RatingProvider;

const BASE_URL: &str = "https://codeforces.com/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Status envelope of every Codeforces API response.
#[derive(Debug, Deserialize)]
struct CfResponse {
    status: String,
    comment: Option<String>,
    result: Option<Vec<CfRatingChange>>,
}

/// One entry of the `user.rating` result list.
#[derive(Debug, Deserialize)]
struct CfRatingChange {
    #[serde(rename = "contestId")]
    contest_id: i64,
    #[serde(rename = "contestName")]
    contest_name: String,
    rank: i64,
    #[serde(rename = "ratingUpdateTimeSeconds")]
    rating_update_time_seconds: i64,
    #[serde(rename = "newRating")]
    new_rating: i64,
}

pub struct CodeforcesProvider {
    client: Client,
    base_url: String,
}

impl CodeforcesProvider {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Map the raw API envelope to a normalized record.
    fn normalize(handle: &str, response: CfResponse) -> Result<RatingRecord, PlatformDataError> {
        if response.status != "OK" {
            log::info!(
                "Codeforces rejected handle '{}': {}",
                handle,
                response.comment.as_deref().unwrap_or("no comment")
            );
            return Err(PlatformDataError::InvalidHandle {
                platform: Platform::Codeforces,
                handle: handle.to_string(),
            });
        }

        let changes = response
            .result
            .ok_or_else(|| PlatformDataError::MalformedPayload {
                origin: "codeforces".to_string(),
                message: "status OK without result list".to_string(),
            })?;

        let mut history: Vec<ContestResult> = changes
            .into_iter()
            .filter_map(|change| {
                let timestamp = Utc
                    .timestamp_opt(change.rating_update_time_seconds, 0)
                    .single()?;
                Some(ContestResult {
                    contest_name: change.contest_name,
                    rank: change.rank,
                    rating: Some(change.new_rating),
                    timestamp,
                    contest_id: Some(change.contest_id.to_string()),
                    attended: None,
                    problems_solved: None,
                    problems_total: None,
                })
            })
            .collect();

        // Newest first, regardless of API order.
        history.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let current_rating = history.first().and_then(|c| c.rating);
        let highest_rating = history.iter().filter_map(|c| c.rating).max();

        Ok(RatingRecord {
            handle: handle.to_string(),
            platform: Platform::Codeforces,
            history,
            current_rating,
            highest_rating,
            stars: None,
        })
    }
}

impl Default for CodeforcesProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RatingProvider for CodeforcesProvider {
    fn platform(&self) -> Platform {
        Platform::Codeforces
    }

    async fn fetch_rating_history(&self, handle: &str) -> Result<RatingRecord, PlatformDataError> {
        if handle.trim().is_empty() {
            return Err(PlatformDataError::EmptyHandle {
                platform: Platform::Codeforces,
            });
        }

        let url = format!("{}/user.rating?handle={}", self.base_url, handle);
        log::debug!("Fetching Codeforces rating history for '{}'", handle);

        let response = self.client.get(&url).send().await?;

        let envelope: CfResponse =
            response
                .json()
                .await
                .map_err(|e| PlatformDataError::MalformedPayload {
                    origin: "codeforces".to_string(),
                    message: e.to_string(),
                })?;

        Self::normalize(handle, envelope)
    }
}
