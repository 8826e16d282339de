//! Platform handle storage trait.

use async_trait::async_trait;

use super::model::PlatformHandles;
use crate::errors::Result;

use kodekaro_platform_data::Platform;

/// Storage interface for per-user platform handles.
#[async_trait]
pub trait HandleStore: Send + Sync {
    /// The stored handle row for `user_id`, if one exists.
    async fn get_for_user(&self, user_id: &str) -> Result<Option<PlatformHandles>>;

    /// Upsert one platform column for `user_id`, creating the row if needed.
    /// `handle: None` clears the column.
    async fn save_handle(
        &self,
        user_id: &str,
        email: &str,
        platform: Platform,
        handle: Option<&str>,
    ) -> Result<PlatformHandles>;

    /// Clear `platform`'s column wherever it currently equals `handle`.
    ///
    /// Used when a platform rejects a handle. Idempotent: a second call
    /// matches no rows and changes nothing. Returns the number of rows
    /// updated.
    async fn clear_handle_matching(&self, platform: Platform, handle: &str) -> Result<usize>;
}
