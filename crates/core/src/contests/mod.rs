//! Upcoming contest listing.
//!
//! Wraps the cross-platform contest feed with the ten-minute TTL cache and
//! offers site filtering for the user's platform toggles. The whole listing
//! is cached as one entry; filtering happens after the cache read.

mod service;
#[cfg(test)]
mod service_tests;

pub use service::{UpcomingContestService, UpcomingContestSource};
