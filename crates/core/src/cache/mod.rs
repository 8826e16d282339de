//! TTL key-value cache.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |     Services     | --> |   CacheService   |  (typed get/put, TTL checks)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    CacheStore    |  (raw string key/value trait)
//!                          +------------------+
//!                             |            |
//!                             v            v
//!                   MemoryCacheStore  SqliteCacheStore (storage crate)
//! ```
//!
//! Entries are stored as JSON alongside their fetch timestamp. TTL is
//! supplied by the caller on every read and never stored: the same entry can
//! be fresh for one caller and stale for another. Expired entries read as
//! absent and stay in place until the next successful fetch overwrites them;
//! there is no eviction.

mod memory;
mod model;
mod service;
mod store;

pub use memory::MemoryCacheStore;
pub use model::CacheEntry;
pub use service::CacheService;
pub use store::CacheStore;
