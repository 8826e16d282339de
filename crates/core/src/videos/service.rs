//! Video catalog service.

use async_trait::async_trait;
use std::sync::Arc;

use crate::cache::CacheService;
use crate::constants::{video_catalog_ttl, SLOW_FETCH_NOTICE_DELAY, VIDEO_CATALOG_CACHE_KEY};
use crate::errors::Result;
use crate::notify::{NoticeLevel, Notifier};

use kodekaro_platform_data::{PlatformDataError, VideoCatalogProvider, VideoRecord};

/// Source of the raw video catalog.
///
/// Seam for tests; the production implementation is the channel data
/// adapter from the platform data crate.
#[async_trait]
pub trait VideoCatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> std::result::Result<Vec<VideoRecord>, PlatformDataError>;
}

#[async_trait]
impl VideoCatalogSource for VideoCatalogProvider {
    async fn fetch_catalog(&self) -> std::result::Result<Vec<VideoRecord>, PlatformDataError> {
        VideoCatalogProvider::fetch_catalog(self).await
    }
}

/// Cached access to the editorial video catalog.
#[derive(Clone)]
pub struct VideoCatalogService {
    source: Arc<dyn VideoCatalogSource>,
    cache: CacheService,
    notifier: Arc<dyn Notifier>,
}

impl VideoCatalogService {
    pub fn new(
        source: Arc<dyn VideoCatalogSource>,
        cache: CacheService,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            source,
            cache,
            notifier,
        }
    }

    /// The video catalog, served from cache when fresh.
    ///
    /// `force_refresh` skips the cache read but still writes through on
    /// success. While a fetch is in flight, an advisory timer tells the user
    /// after [`SLOW_FETCH_NOTICE_DELAY`] that the source is slow; the fetch
    /// itself is never aborted. On failure nothing is cached and the error
    /// propagates so the caller can degrade.
    pub async fn catalog(&self, force_refresh: bool) -> Result<Vec<VideoRecord>> {
        if !force_refresh {
            if let Some(videos) = self
                .cache
                .get::<Vec<VideoRecord>>(VIDEO_CATALOG_CACHE_KEY, video_catalog_ttl())?
            {
                log::debug!("Serving video catalog from cache ({} records)", videos.len());
                return Ok(videos);
            }
        }

        let notifier = Arc::clone(&self.notifier);
        let notice = tokio::spawn(async move {
            tokio::time::sleep(SLOW_FETCH_NOTICE_DELAY).await;
            notifier.notify(
                NoticeLevel::Info,
                "Fetching videos is taking longer than usual, hang tight",
            );
        });

        let fetched = self.source.fetch_catalog().await;
        notice.abort();

        let videos = fetched.map_err(|e| {
            log::error!("Video catalog fetch failed: {e}");
            crate::Error::from(e)
        })?;

        self.cache.put(VIDEO_CATALOG_CACHE_KEY, &videos)?;
        log::info!("Refreshed video catalog ({} records)", videos.len());
        Ok(videos)
    }
}
