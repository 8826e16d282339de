//! Platform handle service.

use std::sync::Arc;

use super::model::PlatformHandles;
use super::store::HandleStore;
use crate::cache::CacheService;
use crate::constants::rating_cache_key;
use crate::errors::Result;

use kodekaro_platform_data::Platform;

/// Domain operations over the handle store, layering cache hygiene on top:
/// any operation that retires a handle also drops that handle's cached
/// rating data.
#[derive(Clone)]
pub struct HandleService {
    store: Arc<dyn HandleStore>,
    cache: CacheService,
}

impl HandleService {
    pub fn new(store: Arc<dyn HandleStore>, cache: CacheService) -> Self {
        Self { store, cache }
    }

    pub async fn handles_for_user(&self, user_id: &str) -> Result<Option<PlatformHandles>> {
        self.store.get_for_user(user_id).await
    }

    /// Store a new handle for one platform.
    ///
    /// If the user previously had a different handle there, its cache entry
    /// is invalidated. Nothing is fetched for the new handle; the next
    /// dashboard refresh does that.
    pub async fn set_handle(
        &self,
        user_id: &str,
        email: &str,
        platform: Platform,
        handle: Option<&str>,
    ) -> Result<PlatformHandles> {
        let previous = self
            .store
            .get_for_user(user_id)
            .await?
            .and_then(|row| row.handle_for(platform).map(str::to_string));

        let row = self.store.save_handle(user_id, email, platform, handle).await?;

        if let Some(old) = previous {
            if handle != Some(old.as_str()) {
                self.cache.invalidate(&rating_cache_key(platform, &old))?;
                log::info!("Replaced {platform} handle '{old}' for user {user_id}");
            }
        }

        Ok(row)
    }

    /// Retire a handle the platform reported as unknown.
    ///
    /// Clears the handle wherever it is stored and drops its cached rating
    /// data. Safe to call repeatedly for the same handle.
    pub async fn clear_invalid(&self, platform: Platform, handle: &str) -> Result<usize> {
        let cleared = self.store.clear_handle_matching(platform, handle).await?;
        self.cache.invalidate(&rating_cache_key(platform, handle))?;
        if cleared > 0 {
            log::info!("Cleared invalid {platform} handle '{handle}' from {cleared} row(s)");
        }
        Ok(cleared)
    }
}
