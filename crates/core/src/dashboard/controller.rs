//! Dashboard controller.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use super::model::{PlatformView, ViewState};
use crate::bookmarks::BookmarkService;
use crate::cache::CacheService;
use crate::constants::{rating_cache_key, rating_ttl};
use crate::errors::{Error, Result};
use crate::handles::HandleService;
use crate::notify::{NoticeLevel, Notifier};
use crate::videos::VideoCatalogService;

use kodekaro_platform_data::{FailureKind, RatingProvider, RatingRecord};

/// State machine driving one platform's dashboard panel.
///
/// One controller type serves every platform; it is parameterized by the
/// injected [`RatingProvider`] and derives everything platform-specific
/// (cache key, match strategy, URLs) from the provider's platform.
///
/// Refreshes are guarded by a generation counter: each refresh snapshots the
/// counter and only commits its result if no newer refresh (or handle
/// change) has bumped it since. A slow response for an old handle can
/// therefore never overwrite a newer view.
pub struct DashboardController {
    provider: Arc<dyn RatingProvider>,
    cache: CacheService,
    bookmarks: BookmarkService,
    handles: HandleService,
    videos: VideoCatalogService,
    notifier: Arc<dyn Notifier>,
    state: Mutex<ViewState>,
    generation: AtomicU64,
}

impl DashboardController {
    pub fn new(
        provider: Arc<dyn RatingProvider>,
        cache: CacheService,
        bookmarks: BookmarkService,
        handles: HandleService,
        videos: VideoCatalogService,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            provider,
            cache,
            bookmarks,
            handles,
            videos,
            notifier,
            state: Mutex::new(ViewState::Idle),
            generation: AtomicU64::new(0),
        }
    }

    /// The current view state.
    pub fn state(&self) -> ViewState {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Refresh the panel for `handle` owned by `email`.
    ///
    /// With an empty handle or email the panel goes `Idle` and nothing is
    /// fetched. Otherwise the rating data (cache first, then adapter) and
    /// the bookmark set are loaded concurrently; both must be in before the
    /// view is projected. Returns the state the panel ended up in.
    pub async fn refresh(
        &self,
        handle: &str,
        email: &str,
        bookmarked_only: bool,
    ) -> Result<ViewState> {
        if handle.trim().is_empty() || email.trim().is_empty() {
            // A cleared identity also retires any refresh still in flight.
            self.generation.fetch_add(1, Ordering::SeqCst);
            self.set_state(ViewState::Idle);
            return Ok(ViewState::Idle);
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        // Remember what was on screen before Loading replaces it, in case
        // this refresh fails transiently and the view should stay.
        let prior = match self.state() {
            ViewState::Ready(view) => Some(view),
            ViewState::Error { last_good, .. } => last_good,
            _ => None,
        };
        self.set_state(ViewState::Loading);

        let (rating, bookmarks) = futures::join!(
            self.load_rating(handle),
            self.bookmarks.bookmarked_set(email)
        );

        match rating {
            Ok(record) => {
                let bookmarked = bookmarks.unwrap_or_else(|e| {
                    log::error!("Bookmark lookup failed: {e}");
                    self.notifier
                        .notify(NoticeLevel::Warning, "Could not load your bookmarks");
                    HashSet::new()
                });
                let catalog = match self.videos.catalog(false).await {
                    Ok(catalog) => catalog,
                    Err(e) => {
                        log::error!("Video catalog unavailable: {e}");
                        Vec::new()
                    }
                };

                let view = PlatformView::project(&record, &bookmarked, &catalog, bookmarked_only);
                Ok(self.commit(generation, ViewState::Ready(view)))
            }
            Err(err) => self.fail(generation, handle, err, prior).await,
        }
    }

    /// Change the stored handle for this platform.
    ///
    /// An empty input is rejected with a notice and no write. Otherwise the
    /// handle row is updated and the old handle's cache entry dropped via
    /// [`HandleService`]; nothing is fetched for the new handle, and any
    /// in-flight refresh for the old one is invalidated.
    pub async fn change_handle(&self, user_id: &str, email: &str, new_handle: &str) -> Result<()> {
        if new_handle.trim().is_empty() {
            self.notifier
                .notify(NoticeLevel::Warning, "Username cannot be empty");
            return Ok(());
        }

        self.handles
            .set_handle(
                user_id,
                email,
                self.provider.platform(),
                Some(new_handle.trim()),
            )
            .await?;

        // Outstanding fetches now belong to the old identity.
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.set_state(ViewState::Idle);
        Ok(())
    }

    async fn load_rating(&self, handle: &str) -> Result<RatingRecord> {
        let key = rating_cache_key(self.provider.platform(), handle);

        if let Some(record) = self.cache.get::<RatingRecord>(&key, rating_ttl())? {
            log::debug!("Rating cache hit for '{key}'");
            return Ok(record);
        }

        let record = self.provider.fetch_rating_history(handle).await?;
        self.cache.put(&key, &record)?;
        Ok(record)
    }

    async fn fail(
        &self,
        generation: u64,
        handle: &str,
        err: Error,
        prior: Option<PlatformView>,
    ) -> Result<ViewState> {
        let platform = self.provider.platform();

        let kind = match &err {
            Error::PlatformData(e) => e.failure_kind(),
            // Cache or store trouble during the load; treat like an outage.
            _ => FailureKind::Transport,
        };

        match kind {
            FailureKind::InvalidIdentity => {
                self.handles.clear_invalid(platform, handle).await?;
                let message = format!(
                    "{} username '{}' was not found. Please enter a new one.",
                    platform.display_name(),
                    handle
                );
                self.notifier.notify(NoticeLevel::Error, &message);
                Ok(self.commit(
                    generation,
                    ViewState::Error {
                        message,
                        last_good: None,
                    },
                ))
            }
            FailureKind::Transport | FailureKind::MalformedPayload => {
                log::error!("{platform} refresh failed for '{handle}': {err}");
                Ok(self.commit(
                    generation,
                    ViewState::Error {
                        message: format!("Could not reach {}", platform.display_name()),
                        last_good: prior,
                    },
                ))
            }
        }
    }

    /// Install `next` unless a newer refresh has started since `generation`
    /// was taken. Returns the state that is actually current afterwards.
    pub(crate) fn commit(&self, generation: u64, next: ViewState) -> ViewState {
        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!("Discarding stale refresh result (generation {generation})");
            return self.state();
        }
        self.set_state(next.clone());
        next
    }

    fn set_state(&self, next: ViewState) {
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = next;
    }
}
