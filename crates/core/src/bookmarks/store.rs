//! Bookmark storage trait.

use async_trait::async_trait;

use super::model::Bookmark;
use crate::errors::Result;

/// Storage interface for contest bookmarks.
///
/// One row per (email, contest name) pair; adding the same pair twice is a
/// unique-constraint violation.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// All bookmarks belonging to `email`, in insertion order.
    async fn list_for_user(&self, email: &str) -> Result<Vec<Bookmark>>;

    /// Record a bookmark for `email` on `contest_name`.
    async fn add(&self, email: &str, contest_name: &str) -> Result<Bookmark>;

    /// Remove the bookmark for `email` on `contest_name`, if present.
    async fn remove(&self, email: &str, contest_name: &str) -> Result<()>;
}
