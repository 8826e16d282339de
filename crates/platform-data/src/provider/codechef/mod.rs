//! CodeChef rating adapter.
//!
//! Fetches a user's profile and rating history from the community CodeChef
//! API (`/handle/{user}`). The payload carries a `success` flag; `false`
//! means the handle is unknown. Numeric fields of the rating list arrive as
//! strings and are parsed here; entries that fail to parse are dropped with
//! a warning rather than failing the whole record.
//!
//! Unlike the other platforms, the history order from the source is trusted
//! as-is (it is chronological).

use async_trait::async_trait;
use chrono::{NaiveDateTime, TimeZone, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::errors::PlatformDataError;
use crate::models::{ContestResult, Platform, RatingRecord};
use crate::provider::RatingProvider;

const BASE_URL: &str = "https://codechef-api.vercel.app";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const END_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Deserialize)]
struct CcResponse {
    success: bool,
    #[serde(rename = "currentRating")]
    current_rating: Option<i64>,
    #[serde(rename = "highestRating")]
    highest_rating: Option<i64>,
    stars: Option<String>,
    #[serde(rename = "ratingData")]
    rating_data: Option<Vec<CcRatingEntry>>,
}

#[derive(Debug, Deserialize)]
struct CcRatingEntry {
    code: String,
    name: String,
    /// Rating after the contest, as a decimal string.
    rating: String,
    /// Rank in the contest, as a decimal string.
    rank: String,
    end_date: String,
}

pub struct CodechefProvider {
    client: Client,
    base_url: String,
}

impl CodechefProvider {
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

    fn normalize(handle: &str, response: CcResponse) -> Result<RatingRecord, PlatformDataError> {
        if !response.success {
            log::info!("CodeChef rejected handle '{}'", handle);
            return Err(PlatformDataError::InvalidHandle {
                platform: Platform::Codechef,
                handle: handle.to_string(),
            });
        }

        let entries = response.rating_data.unwrap_or_default();

        // Source order is chronological; keep it.
        let history: Vec<ContestResult> = entries
            .into_iter()
            .filter_map(|entry| {
                let rating = entry.rating.parse::<i64>();
                let rank = entry.rank.parse::<i64>();
                let end_date = NaiveDateTime::parse_from_str(&entry.end_date, END_DATE_FORMAT);
                match (rating, rank, end_date) {
                    (Ok(rating), Ok(rank), Ok(end_date)) => Some(ContestResult {
                        contest_name: entry.name,
                        rank,
                        rating: Some(rating),
                        timestamp: Utc.from_utc_datetime(&end_date),
                        contest_id: Some(entry.code),
                        attended: None,
                        problems_solved: None,
                        problems_total: None,
                    }),
                    _ => {
                        log::warn!(
                            "Dropping unparseable CodeChef rating entry '{}' for '{}'",
                            entry.code,
                            handle
                        );
                        None
                    }
                }
            })
            .collect();

        Ok(RatingRecord {
            handle: handle.to_string(),
            platform: Platform::Codechef,
            history,
            current_rating: response.current_rating,
            highest_rating: response.highest_rating,
            stars: response.stars,
        })
    }
}

impl Default for CodechefProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RatingProvider for CodechefProvider {
    fn platform(&self) -> Platform {
        Platform::Codechef
    }

    async fn fetch_rating_history(&self, handle: &str) -> Result<RatingRecord, PlatformDataError> {
        if handle.trim().is_empty() {
            return Err(PlatformDataError::EmptyHandle {
                platform: Platform::Codechef,
            });
        }

        let url = format!("{}/handle/{}", self.base_url, handle);
        log::debug!("Fetching CodeChef profile for '{}'", handle);

        let response = self.client.get(&url).send().await?;

        let body: CcResponse =
            response
                .json()
                .await
                .map_err(|e| PlatformDataError::MalformedPayload {
                    origin: "codechef".to_string(),
                    message: e.to_string(),
                })?;

        Self::normalize(handle, body)
    }
}
