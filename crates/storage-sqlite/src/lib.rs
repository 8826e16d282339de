//! SQLite storage implementation for Kodekaro.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the storage traits defined in `kodekaro-core`
//! and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for handles, bookmarks and the cache
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the workspace where Diesel dependencies
//! exist. The other crates are database-agnostic and work with traits.
//!
//! ```text
//! core (domain)    platform-data (adapters)
//!       |                  |
//!       +--------+---------+
//!                |
//!                v
//!       storage-sqlite (this crate)
//!                |
//!                v
//!            SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod bookmarks;
pub mod cache;
pub mod handles;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export repositories
pub use bookmarks::SqliteBookmarkRepository;
pub use cache::SqliteCacheStore;
pub use handles::SqliteHandleRepository;

// Re-export from kodekaro-core for convenience
pub use kodekaro_core::errors::{DatabaseError, Error, Result};
