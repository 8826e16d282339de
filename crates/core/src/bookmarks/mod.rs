//! Contest bookmarks.
//!
//! Bookmarks are keyed by (email, contest name) and live in the record store
//! behind the [`BookmarkStore`] trait. The dashboard works with a plain set
//! of bookmarked contest names per user; the set is fetched fresh on every
//! dashboard refresh and is never put under the TTL cache.

mod model;
mod service;
mod store;

pub use model::Bookmark;
pub use service::BookmarkService;
pub use store::BookmarkStore;
