//! Cache storage trait.

use crate::errors::Result;

/// Raw string key-value storage for cache entries.
///
/// Implementations persist serialized [`CacheEntry`](super::CacheEntry)
/// values; they know nothing about payload types or TTLs. Both an in-memory
/// implementation ([`MemoryCacheStore`](super::MemoryCacheStore)) and a
/// SQLite-backed one (in the storage crate) exist.
pub trait CacheStore: Send + Sync {
    /// Read the raw serialized entry under `key`, if any.
    fn get_raw(&self, key: &str) -> Result<Option<String>>;

    /// Write the raw serialized entry under `key`, replacing any previous
    /// value. Stale values are only ever removed by being overwritten here.
    fn put_raw(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the entry under `key`. Removing a missing key is not an error.
    fn invalidate(&self, key: &str) -> Result<()>;
}
