//! External data source adapters.
//!
//! This module contains:
//! - The `RatingProvider` trait that all rating source adapters implement
//! - Concrete adapters for Codeforces, LeetCode, and CodeChef
//! - The video catalog adapter and the upcoming contest listing adapter
//!
//! Adapters are pure fetch-and-normalize components: they validate the raw
//! payload at the boundary, map it to the crate's models, and report failures
//! through [`PlatformDataError`](crate::errors::PlatformDataError). They hold
//! no state beyond an HTTP client and never touch caches or storage.

mod traits;

pub mod codechef;
pub mod codeforces;
pub mod leetcode;
pub mod upcoming;
pub mod youtube;

pub use traits::RatingProvider;
