//! Rating provider trait definition.

use async_trait::async_trait;

use crate::errors::PlatformDataError;
use crate::models::{Platform, RatingRecord};

/// Trait for rating history sources.
///
/// Implement this trait to add support for a new competitive programming
/// platform. The dashboard controller is generic over this trait and drives
/// caching, handle cleanup, and presentation on top of it.
#[async_trait]
pub trait RatingProvider: Send + Sync {
    /// The platform this adapter serves.
    fn platform(&self) -> Platform;

    /// Fetch the full rating history for a handle.
    ///
    /// # Arguments
    ///
    /// * `handle` - The platform username. Must be non-empty; no other
    ///   client-side format validation is performed, the platform is the
    ///   authority on handle validity.
    ///
    /// # Returns
    ///
    /// The normalized rating record on success. A handle the platform does
    /// not recognize yields `PlatformDataError::InvalidHandle`; transport
    /// and payload-shape failures yield their own variants and are never
    /// reported as an invalid handle.
    async fn fetch_rating_history(&self, handle: &str) -> Result<RatingRecord, PlatformDataError>;
}
