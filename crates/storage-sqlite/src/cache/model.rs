//! Database model for cache entries.

use diesel::prelude::*;

/// One serialized cache entry, keyed by its cache key.
#[derive(Queryable, Identifiable, Insertable, AsChangeset, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::kv_cache)]
#[diesel(primary_key(cache_key))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CacheRowDB {
    pub cache_key: String,
    pub entry: String,
}
