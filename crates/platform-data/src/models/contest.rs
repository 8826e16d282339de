//! Upcoming contest listing types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An upcoming contest from the cross-platform listing feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingContest {
    pub title: String,
    pub url: String,
    pub start_time: DateTime<Utc>,
    /// Hosting site identifier as reported by the feed, lowercased
    /// (e.g. "codeforces", "leetcode", "codechef").
    pub site: String,
}
