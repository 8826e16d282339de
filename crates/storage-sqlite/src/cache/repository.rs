use diesel::prelude::*;
use std::sync::Arc;

use super::model::CacheRowDB;
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::kv_cache;

use kodekaro_core::cache::CacheStore;
use kodekaro_core::errors::Result;

/// SQLite-backed cache store.
///
/// Entries survive restarts; staleness is judged by the caller from the
/// timestamp inside the serialized entry, so rows are only ever removed by
/// being overwritten or explicitly invalidated.
pub struct SqliteCacheStore {
    pool: Arc<DbPool>,
}

impl SqliteCacheStore {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SqliteCacheStore { pool }
    }
}

impl CacheStore for SqliteCacheStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        kv_cache::table
            .find(key)
            .select(kv_cache::entry)
            .first::<String>(&mut conn)
            .optional()
            .into_core()
    }

    fn put_raw(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::replace_into(kv_cache::table)
            .values(&CacheRowDB {
                cache_key: key.to_string(),
                entry: value.to_string(),
            })
            .execute(&mut conn)
            .into_core()?;
        Ok(())
    }

    fn invalidate(&self, key: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::delete(kv_cache::table.find(key))
            .execute(&mut conn)
            .into_core()?;
        Ok(())
    }
}
