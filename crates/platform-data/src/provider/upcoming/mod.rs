//! Upcoming contest listing adapter.
//!
//! Fetches the cross-platform upcoming contest feed. The feed's `startTime`
//! field is not stable across sites: some entries carry epoch milliseconds,
//! others an RFC 3339 string. Both forms are accepted; entries with neither
//! are dropped.

use chrono::{DateTime, TimeZone, Utc};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::errors::PlatformDataError;
use crate::models::UpcomingContest;

const BASE_URL: &str = "https://competeapi.vercel.app";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct UpcomingContestProvider {
    client: Client,
    base_url: String,
}

impl UpcomingContestProvider {
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

    /// Fetch the upcoming contest listing across all sites, in feed order.
    pub async fn fetch_upcoming(&self) -> Result<Vec<UpcomingContest>, PlatformDataError> {
        let url = format!("{}/contests/upcoming", self.base_url);
        log::debug!("Fetching upcoming contest listing");

        let response = self.client.get(&url).send().await?;

        let raw: Vec<Value> =
            response
                .json()
                .await
                .map_err(|e| PlatformDataError::MalformedPayload {
                    origin: "contests".to_string(),
                    message: e.to_string(),
                })?;

        Ok(Self::normalize(raw))
    }

    fn normalize(raw: Vec<Value>) -> Vec<UpcomingContest> {
        raw.into_iter()
            .filter_map(|entry| {
                let title = entry.get("title")?.as_str()?.to_string();
                let url = entry.get("url")?.as_str()?.to_string();
                let site = entry.get("site")?.as_str()?.to_lowercase();
                let start_time = Self::parse_start_time(entry.get("startTime")?)?;
                Some(UpcomingContest {
                    title,
                    url,
                    start_time,
                    site,
                })
            })
            .collect()
    }

    fn parse_start_time(value: &Value) -> Option<DateTime<Utc>> {
        match value {
            Value::Number(n) => Utc.timestamp_millis_opt(n.as_i64()?).single(),
            Value::String(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            _ => None,
        }
    }
}

impl Default for UpcomingContestProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_accepts_millis_and_rfc3339() {
        let raw = vec![
            json!({"title": "Codeforces Round 951 (Div. 2)",
                   "url": "https://codeforces.com/contests/1951",
                   "startTime": 1756500000000i64, "site": "CodeForces"}),
            json!({"title": "Weekly Contest 413",
                   "url": "https://leetcode.com/contest/weekly-contest-413",
                   "startTime": "2025-09-07T02:30:00+00:00", "site": "LeetCode"}),
        ];

        let contests = UpcomingContestProvider::normalize(raw);
        assert_eq!(contests.len(), 2);
        assert_eq!(contests[0].site, "codeforces");
        assert_eq!(contests[1].site, "leetcode");
        assert_eq!(contests[1].start_time.timestamp(), 1757212200);
    }

    #[test]
    fn test_normalize_drops_incomplete_entries() {
        let raw = vec![
            json!({"title": "No url", "startTime": 1756500000000i64, "site": "codechef"}),
            json!({"title": "Bad time", "url": "https://x", "startTime": true, "site": "codechef"}),
            json!({"title": "Starters 180", "url": "https://www.codechef.com/START180",
                   "startTime": 1756500000000i64, "site": "codechef"}),
        ];

        let contests = UpcomingContestProvider::normalize(raw);
        assert_eq!(contests.len(), 1);
        assert_eq!(contests[0].title, "Starters 180");
    }
}
