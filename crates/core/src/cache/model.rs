//! Cache entry model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A cached payload together with the moment it was fetched.
///
/// The entry carries no TTL of its own; freshness is decided at read time
/// against a caller-supplied TTL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub payload: T,
    pub fetched_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    /// Wrap a payload, stamping it with the current time.
    pub fn new(payload: T) -> Self {
        Self {
            payload,
            fetched_at: Utc::now(),
        }
    }

    /// Whether the entry is still fresh at `now` under the given TTL.
    ///
    /// An entry is fresh strictly before `fetched_at + ttl`; at exactly that
    /// instant it is stale.
    pub fn is_fresh(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now - self.fetched_at < ttl
    }
}
