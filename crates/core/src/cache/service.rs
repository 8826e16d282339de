//! Typed cache service over a raw store.

use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use super::model::CacheEntry;
use super::store::CacheStore;
use crate::errors::Result;

/// Typed facade over a [`CacheStore`].
///
/// Serializes payloads as JSON [`CacheEntry`] records and applies the
/// caller-supplied TTL on every read. Cloning is cheap; clones share the
/// underlying store.
#[derive(Clone)]
pub struct CacheService {
    store: Arc<dyn CacheStore>,
}

impl CacheService {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    /// Read the payload under `key` if a fresh entry exists.
    ///
    /// Returns `None` for a missing key, an expired entry, or an entry whose
    /// payload no longer deserializes (left over from a schema change).
    /// Stale entries are not removed; the next successful fetch overwrites
    /// them.
    pub fn get<T: DeserializeOwned>(&self, key: &str, ttl: Duration) -> Result<Option<T>> {
        self.get_at(key, ttl, Utc::now())
    }

    pub(crate) fn get_at<T: DeserializeOwned>(
        &self,
        key: &str,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<Option<T>> {
        let raw = match self.store.get_raw(key)? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        let entry: CacheEntry<T> = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                // Orphaned by a payload schema change. Read as absent.
                log::warn!("Ignoring undeserializable cache entry '{key}': {e}");
                return Ok(None);
            }
        };

        if entry.is_fresh(ttl, now) {
            Ok(Some(entry.payload))
        } else {
            log::debug!("Cache entry '{key}' is stale");
            Ok(None)
        }
    }

    /// Store `payload` under `key`, stamped with the current time.
    pub fn put<T: Serialize>(&self, key: &str, payload: &T) -> Result<()> {
        let entry = CacheEntry {
            payload,
            fetched_at: Utc::now(),
        };
        let raw = serde_json::to_string(&entry)?;
        self.store.put_raw(key, &raw)
    }

    /// Drop the entry under `key`, fresh or stale.
    pub fn invalidate(&self, key: &str) -> Result<()> {
        self.store.invalidate(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCacheStore;

    fn service() -> (CacheService, Arc<MemoryCacheStore>) {
        let store = Arc::new(MemoryCacheStore::new());
        (CacheService::new(store.clone()), store)
    }

    fn put_at(service: &CacheService, key: &str, payload: &str, fetched_at: DateTime<Utc>) {
        let entry = CacheEntry {
            payload: payload.to_string(),
            fetched_at,
        };
        let raw = serde_json::to_string(&entry).unwrap();
        service.store.put_raw(key, &raw).unwrap();
    }

    #[test]
    fn test_fresh_entry_is_returned() {
        let (service, _) = service();
        service.put("k", &"payload".to_string()).unwrap();

        let got: Option<String> = service.get("k", Duration::minutes(5)).unwrap();
        assert_eq!(got.as_deref(), Some("payload"));
    }

    #[test]
    fn test_entry_expires_exactly_at_ttl() {
        let (service, _) = service();
        let fetched_at = Utc::now();
        put_at(&service, "k", "payload", fetched_at);

        let ttl = Duration::minutes(5);
        let just_before = fetched_at + Duration::seconds(299);
        let at_boundary = fetched_at + ttl;

        let fresh: Option<String> = service.get_at("k", ttl, just_before).unwrap();
        assert!(fresh.is_some());

        let stale: Option<String> = service.get_at("k", ttl, at_boundary).unwrap();
        assert!(stale.is_none());
    }

    #[test]
    fn test_ttl_is_callers_choice() {
        let (service, _) = service();
        let fetched_at = Utc::now();
        put_at(&service, "k", "payload", fetched_at);

        let now = fetched_at + Duration::minutes(30);
        let short: Option<String> = service.get_at("k", Duration::minutes(10), now).unwrap();
        let long: Option<String> = service.get_at("k", Duration::minutes(60), now).unwrap();

        assert!(short.is_none());
        assert!(long.is_some());
    }

    #[test]
    fn test_expired_entry_stays_until_overwritten() {
        let (service, store) = service();
        let long_ago = Utc::now() - Duration::hours(2);
        put_at(&service, "k", "old", long_ago);

        // Expired reads as absent but the raw entry is still there.
        let got: Option<String> = service.get("k", Duration::minutes(5)).unwrap();
        assert!(got.is_none());
        assert_eq!(store.len(), 1);

        service.put("k", &"new".to_string()).unwrap();
        let got: Option<String> = service.get("k", Duration::minutes(5)).unwrap();
        assert_eq!(got.as_deref(), Some("new"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_undeserializable_entry_reads_as_absent() {
        let (service, store) = service();
        store.put_raw("k", "{\"not\": \"a cache entry\"}").unwrap();

        let got: Option<String> = service.get("k", Duration::minutes(5)).unwrap();
        assert!(got.is_none());
    }

    #[test]
    fn test_invalidate_removes_entry() {
        let (service, store) = service();
        service.put("k", &1).unwrap();
        service.invalidate("k").unwrap();
        assert!(store.is_empty());
    }
}
