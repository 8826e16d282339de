//! Bookmark service.

use std::collections::HashSet;
use std::sync::Arc;

use super::store::BookmarkStore;
use crate::errors::Result;

/// Domain operations over the bookmark store.
#[derive(Clone)]
pub struct BookmarkService {
    store: Arc<dyn BookmarkStore>,
}

impl BookmarkService {
    pub fn new(store: Arc<dyn BookmarkStore>) -> Self {
        Self { store }
    }

    /// The set of contest names `email` has bookmarked.
    ///
    /// Always read from the store; bookmark state is never served from the
    /// TTL cache.
    pub async fn bookmarked_set(&self, email: &str) -> Result<HashSet<String>> {
        let bookmarks = self.store.list_for_user(email).await?;
        Ok(bookmarks.into_iter().map(|b| b.contest_name).collect())
    }

    /// Toggle `contest_name` in the user's session set.
    ///
    /// The store write happens first; `bookmarked` is only mutated after it
    /// succeeds, so a failed write leaves the rendered state untouched.
    /// Returns whether the contest is bookmarked afterwards.
    pub async fn toggle(
        &self,
        email: &str,
        contest_name: &str,
        bookmarked: &mut HashSet<String>,
    ) -> Result<bool> {
        if bookmarked.contains(contest_name) {
            self.store.remove(email, contest_name).await?;
            bookmarked.remove(contest_name);
            log::debug!("Removed bookmark '{contest_name}' for {email}");
            Ok(false)
        } else {
            self.store.add(email, contest_name).await?;
            bookmarked.insert(contest_name.to_string());
            log::debug!("Added bookmark '{contest_name}' for {email}");
            Ok(true)
        }
    }
}
