//! Platform handle management.
//!
//! Each user stores at most one handle per platform. The handle row is the
//! only identity the dashboard holds: changing a handle rewrites the row,
//! discards the old handle's cached data, and deliberately does not fetch
//! anything for the new one. A handle a platform rejects is cleared from
//! the row wherever it appears.

mod model;
mod service;
mod store;

pub use model::PlatformHandles;
pub use service::HandleService;
pub use store::HandleStore;
