//! In-memory cache store.

use dashmap::DashMap;

use super::store::CacheStore;
use crate::errors::Result;

/// Process-local cache store backed by a concurrent map.
///
/// Used when no durable storage is configured, and as the store of choice in
/// service tests.
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    entries: DashMap<String, String>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held, including stale ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CacheStore for MemoryCacheStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn put_raw(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn invalidate(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_invalidate() {
        let store = MemoryCacheStore::new();
        store.put_raw("k", "v").unwrap();
        assert_eq!(store.get_raw("k").unwrap().as_deref(), Some("v"));

        store.invalidate("k").unwrap();
        assert_eq!(store.get_raw("k").unwrap(), None);
    }

    #[test]
    fn test_invalidate_missing_key_is_ok() {
        let store = MemoryCacheStore::new();
        assert!(store.invalidate("absent").is_ok());
    }

    #[test]
    fn test_put_overwrites() {
        let store = MemoryCacheStore::new();
        store.put_raw("k", "old").unwrap();
        store.put_raw("k", "new").unwrap();
        assert_eq!(store.get_raw("k").unwrap().as_deref(), Some("new"));
        assert_eq!(store.len(), 1);
    }
}
