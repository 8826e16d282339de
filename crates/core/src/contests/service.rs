//! Upcoming contest service.

use async_trait::async_trait;
use std::sync::Arc;

use crate::cache::CacheService;
use crate::constants::{upcoming_contests_ttl, UPCOMING_CONTESTS_CACHE_KEY};
use crate::errors::Result;

use kodekaro_platform_data::{PlatformDataError, UpcomingContest, UpcomingContestProvider};

/// Source of the raw upcoming contest listing.
#[async_trait]
pub trait UpcomingContestSource: Send + Sync {
    async fn fetch_upcoming(&self) -> std::result::Result<Vec<UpcomingContest>, PlatformDataError>;
}

#[async_trait]
impl UpcomingContestSource for UpcomingContestProvider {
    async fn fetch_upcoming(&self) -> std::result::Result<Vec<UpcomingContest>, PlatformDataError> {
        UpcomingContestProvider::fetch_upcoming(self).await
    }
}

/// Cached access to the upcoming contest listing.
#[derive(Clone)]
pub struct UpcomingContestService {
    source: Arc<dyn UpcomingContestSource>,
    cache: CacheService,
}

impl UpcomingContestService {
    pub fn new(source: Arc<dyn UpcomingContestSource>, cache: CacheService) -> Self {
        Self { source, cache }
    }

    /// The full upcoming listing across all sites, served from cache when
    /// fresh.
    pub async fn upcoming(&self) -> Result<Vec<UpcomingContest>> {
        if let Some(contests) = self
            .cache
            .get::<Vec<UpcomingContest>>(UPCOMING_CONTESTS_CACHE_KEY, upcoming_contests_ttl())?
        {
            log::debug!("Serving upcoming contests from cache ({})", contests.len());
            return Ok(contests);
        }

        let contests = self.source.fetch_upcoming().await?;
        self.cache.put(UPCOMING_CONTESTS_CACHE_KEY, &contests)?;
        log::info!("Refreshed upcoming contest listing ({})", contests.len());
        Ok(contests)
    }

    /// Keep only contests hosted on the selected sites, preserving listing
    /// order. Site identifiers are compared case-insensitively.
    pub fn filter_by_sites(contests: &[UpcomingContest], sites: &[&str]) -> Vec<UpcomingContest> {
        let wanted: Vec<String> = sites.iter().map(|s| s.to_lowercase()).collect();
        contests
            .iter()
            .filter(|c| {
                let site = c.site.to_lowercase();
                wanted.iter().any(|s| s == &site)
            })
            .cloned()
            .collect()
    }
}
