//! Shared constants: cache keys, TTLs, and timers.
//!
//! The cache key scheme is `<source>_<identity>`. Keys are stable: renaming
//! a handle leaves the old key orphaned until it is explicitly invalidated,
//! it is never rewritten in place.

use chrono::Duration;
use std::time::Duration as StdDuration;

use kodekaro_platform_data::Platform;

/// Cache key for the combined video catalog entry.
pub const VIDEO_CATALOG_CACHE_KEY: &str = "youtube_data_cache";

/// Cache key for the upcoming contest listing.
pub const UPCOMING_CONTESTS_CACHE_KEY: &str = "contest_data_cache";

/// How long the advisory timer waits before telling the user a video fetch
/// is slow. The fetch itself is never aborted.
pub const SLOW_FETCH_NOTICE_DELAY: StdDuration = StdDuration::from_secs(10);

/// Rating histories go stale after five minutes.
pub fn rating_ttl() -> Duration {
    Duration::minutes(5)
}

/// The upcoming contest listing goes stale after ten minutes.
pub fn upcoming_contests_ttl() -> Duration {
    Duration::minutes(10)
}

/// The video catalog goes stale after an hour.
pub fn video_catalog_ttl() -> Duration {
    Duration::minutes(60)
}

/// Cache key for a user's rating data on one platform.
pub fn rating_cache_key(platform: Platform, handle: &str) -> String {
    match platform {
        Platform::Codeforces => format!("codeforces_user_ratings_{handle}"),
        Platform::Leetcode => format!("leetcode_user_ratings_{handle}"),
        Platform::Codechef => format!("codechef_user_data_{handle}"),
    }
}
