//! Platform data models
//!
//! This module contains the core data types for competitive programming data:
//! - `platform` - Platform enum (Codeforces, LeetCode, CodeChef) and per-platform policy
//! - `rating` - Rating history types (RatingRecord, ContestResult)
//! - `video` - Video catalog records (VideoRecord)
//! - `contest` - Upcoming contest listing (UpcomingContest)

mod contest;
mod platform;
mod rating;
mod video;

pub use contest::UpcomingContest;
pub use platform::Platform;
pub use rating::{ContestResult, RatingRecord};
pub use video::VideoRecord;
