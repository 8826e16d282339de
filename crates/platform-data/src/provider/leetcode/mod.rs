//! LeetCode rating adapter.
//!
//! Fetches a user's contest record from the community LeetCode API mirror
//! (`/{user}/contest`). The API signals an unknown user by including an
//! `errors` field in the payload rather than an HTTP error, so the adapter
//! inspects the body before normalizing.
//!
//! History is re-sorted newest first by contest start time. Entries where the
//! user registered but did not attend keep their slot in the history with no
//! rating value.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::errors::PlatformDataError;
use crate::models::{ContestResult, Platform, RatingRecord};
use crate::provider::RatingProvider;

const BASE_URL: &str = "https://alfa-leetcode-api.onrender.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct LcContestResponse {
    errors: Option<serde_json::Value>,
    #[serde(rename = "contestRating")]
    contest_rating: Option<f64>,
    #[serde(rename = "contestParticipation")]
    contest_participation: Option<Vec<LcParticipation>>,
}

#[derive(Debug, Deserialize)]
struct LcParticipation {
    attended: bool,
    rating: Option<f64>,
    ranking: i64,
    #[serde(rename = "problemsSolved")]
    problems_solved: Option<i64>,
    #[serde(rename = "totalProblems")]
    total_problems: Option<i64>,
    contest: LcContest,
}

#[derive(Debug, Deserialize)]
struct LcContest {
    title: String,
    #[serde(rename = "startTime")]
    start_time: i64,
}

pub struct LeetcodeProvider {
    client: Client,
    base_url: String,
}

impl LeetcodeProvider {
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

    fn normalize(
        handle: &str,
        response: LcContestResponse,
    ) -> Result<RatingRecord, PlatformDataError> {
        // Unknown users come back as a GraphQL-style error body, not an
        // HTTP error status.
        if response.errors.is_some() {
            log::info!("LeetCode rejected handle '{}'", handle);
            return Err(PlatformDataError::InvalidHandle {
                platform: Platform::Leetcode,
                handle: handle.to_string(),
            });
        }

        let participation =
            response
                .contest_participation
                .ok_or(PlatformDataError::InvalidHandle {
                    platform: Platform::Leetcode,
                    handle: handle.to_string(),
                })?;

        let mut history: Vec<ContestResult> = participation
            .into_iter()
            .filter_map(|p| {
                let timestamp = Utc.timestamp_opt(p.contest.start_time, 0).single()?;
                // Rating is kept only for attended contests so the chart
                // reflects actual participation.
                let rating = if p.attended {
                    p.rating.map(|r| r.round() as i64)
                } else {
                    None
                };
                Some(ContestResult {
                    contest_name: p.contest.title,
                    rank: p.ranking,
                    rating,
                    timestamp,
                    contest_id: None,
                    attended: Some(p.attended),
                    problems_solved: p.problems_solved,
                    problems_total: p.total_problems,
                })
            })
            .collect();

        history.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let current_rating = response.contest_rating.map(|r| r.ceil() as i64);
        let highest_rating = history.iter().filter_map(|c| c.rating).max();

        Ok(RatingRecord {
            handle: handle.to_string(),
            platform: Platform::Leetcode,
            history,
            current_rating,
            highest_rating,
            stars: None,
        })
    }
}

impl Default for LeetcodeProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RatingProvider for LeetcodeProvider {
    fn platform(&self) -> Platform {
        Platform::Leetcode
    }

    async fn fetch_rating_history(&self, handle: &str) -> Result<RatingRecord, PlatformDataError> {
        if handle.trim().is_empty() {
            return Err(PlatformDataError::EmptyHandle {
                platform: Platform::Leetcode,
            });
        }

        let url = format!("{}/{}/contest", self.base_url, handle);
        log::debug!("Fetching LeetCode contest record for '{}'", handle);

        let response = self.client.get(&url).send().await?;

        let body: LcContestResponse =
            response
                .json()
                .await
                .map_err(|e| PlatformDataError::MalformedPayload {
                    origin: "leetcode".to_string(),
                    message: e.to_string(),
                })?;

        Self::normalize(handle, body)
    }
}
