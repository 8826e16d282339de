//! Video catalog access.
//!
//! Wraps the channel data adapter with the hour-long TTL cache and the
//! slow-fetch advisory timer. The catalog is shared by every platform view;
//! reconciliation against contests happens at projection time in the
//! dashboard module.

mod service;

pub use service::{VideoCatalogService, VideoCatalogSource};
