//! Rating history types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Platform;

/// One rated contest participation.
///
/// Normalized from the per-platform payloads. `rating` is the rating after
/// the contest; it is absent only when the source omits it (LeetCode entries
/// where the user registered but did not attend).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestResult {
    /// Contest title as reported by the platform. Never empty.
    pub contest_name: String,
    /// Rank achieved in the contest.
    pub rank: i64,
    /// Rating after the contest, when the source reports one.
    pub rating: Option<i64>,
    /// When the contest ended (Codeforces: rating update time).
    pub timestamp: DateTime<Utc>,
    /// Platform-specific contest identifier, kept only to derive the
    /// contest URL (Codeforces contest id, CodeChef contest code).
    pub contest_id: Option<String>,
    /// Whether the user actually participated (LeetCode only).
    pub attended: Option<bool>,
    /// Problems solved out of the contest total (LeetCode only).
    pub problems_solved: Option<i64>,
    pub problems_total: Option<i64>,
}

impl ContestResult {
    /// Derives the public URL of this contest on the given platform.
    ///
    /// Codeforces and CodeChef use the contest identifier; LeetCode derives
    /// a slug from the contest title. Returns `None` when the identifier
    /// needed for the URL is missing.
    pub fn source_url(&self, platform: Platform) -> Option<String> {
        match platform {
            Platform::Codeforces => self
                .contest_id
                .as_ref()
                .map(|id| format!("https://codeforces.com/contest/{}", id)),
            Platform::Codechef => self
                .contest_id
                .as_ref()
                .map(|code| format!("https://www.codechef.com/{}", code)),
            Platform::Leetcode => {
                let slug = self.contest_name.to_lowercase().replace(' ', "-");
                Some(format!("https://leetcode.com/contest/{}/", slug))
            }
        }
    }
}

/// A user's complete rating history on one platform.
///
/// Populated from exactly one successful adapter response (or one fresh
/// cache entry of such a response). Histories from different fetches are
/// never merged.
///
/// History ordering is platform-specific at ingestion:
/// - Codeforces, LeetCode: newest first
/// - CodeChef: source order, which is chronological
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub handle: String,
    pub platform: Platform,
    pub history: Vec<ContestResult>,
    /// Latest rating, when the platform reports a snapshot value.
    pub current_rating: Option<i64>,
    /// All-time peak rating (CodeChef envelope field).
    pub highest_rating: Option<i64>,
    /// Star band, e.g. "4★" (CodeChef only).
    pub stars: Option<String>,
}

impl RatingRecord {
    /// Latest rating, falling back to the newest history entry that has one.
    pub fn effective_rating(&self) -> Option<i64> {
        if self.current_rating.is_some() {
            return self.current_rating;
        }
        match self.platform {
            // Newest-first histories: scan forward.
            Platform::Codeforces | Platform::Leetcode => {
                self.history.iter().find_map(|c| c.rating)
            }
            // Chronological history: scan backward.
            Platform::Codechef => self.history.iter().rev().find_map(|c| c.rating),
        }
    }
}
