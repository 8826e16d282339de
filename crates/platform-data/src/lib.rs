//! Kodekaro Platform Data Crate
//!
//! This crate provides source-agnostic competitive programming data fetching
//! for the Kodekaro dashboard.
//!
//! # Overview
//!
//! The platform data crate supports:
//! - Rating histories from Codeforces, LeetCode, and CodeChef
//! - The editorial channel's video catalog
//! - The cross-platform upcoming contest listing
//! - Contest-to-video reconciliation
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  Dashboard Layer | --> |  RatingProvider  |  (one adapter per platform)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   RatingRecord   |  (normalized history)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |     matcher      |  (contest <-> video links)
//!                          +------------------+
//! ```
//!
//! Adapters parse and validate at the boundary: raw payloads never leak past
//! this crate. Failures carry a [`FailureKind`] so callers can distinguish a
//! bad stored handle from a transient outage.

pub mod errors;
pub mod matcher;
pub mod models;
pub mod provider;

// Re-export all public types from models
pub use models::{ContestResult, Platform, RatingRecord, UpcomingContest, VideoRecord};

// Re-export error types
pub use errors::{FailureKind, PlatformDataError};

// Re-export matcher types
pub use matcher::{related_videos, MatchStrategy};

// Re-export provider types
pub use provider::codechef::CodechefProvider;
pub use provider::codeforces::CodeforcesProvider;
pub use provider::leetcode::LeetcodeProvider;
pub use provider::upcoming::UpcomingContestProvider;
pub use provider::youtube::{VideoCatalogProvider, DEFAULT_CHANNEL};
pub use provider::RatingProvider;
