//! Kodekaro Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the Kodekaro
//! competitive programming dashboard. It is database-agnostic and defines
//! storage traits that are implemented by the `storage-sqlite` crate.

pub mod bookmarks;
pub mod cache;
pub mod constants;
pub mod contests;
pub mod dashboard;
pub mod errors;
pub mod handles;
pub mod notify;
pub mod videos;

// Re-export the view types most hosts consume
pub use dashboard::{DashboardController, PlatformView, ViewState};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
