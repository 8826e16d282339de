//! Error types and failure classification for the platform data crate.
//!
//! This module provides:
//! - [`PlatformDataError`]: The main error enum for all adapter operations
//! - [`FailureKind`]: Classification for determining how callers react

mod failure;

pub use failure::FailureKind;

use thiserror::Error;

use crate::models::Platform;

/// Errors that can occur while fetching external platform data.
///
/// Each variant is classified into a [`FailureKind`] via the
/// [`failure_kind`](Self::failure_kind) method, which determines whether the
/// caller should clean up a stored handle, keep stale data, or surface a
/// plain failure.
#[derive(Error, Debug)]
pub enum PlatformDataError {
    /// The platform reported that the handle does not exist.
    /// This is a terminal error for the stored identity - retrying won't help.
    #[error("Handle not found on {platform}: {handle}")]
    InvalidHandle {
        /// The platform that rejected the handle
        platform: Platform,
        /// The handle that was rejected
        handle: String,
    },

    /// The caller passed an empty handle. Rejected before any request is made.
    #[error("Empty handle for {platform}")]
    EmptyHandle {
        /// The platform the fetch was intended for
        platform: Platform,
    },

    /// The response arrived but did not match the expected shape.
    /// Never confused with an invalid handle.
    #[error("Malformed payload from {origin}: {message}")]
    MalformedPayload {
        /// The source that produced the payload
        origin: String,
        /// Description of the parse failure
        message: String,
    },

    /// A source-specific error that is neither a handle rejection nor a
    /// transport failure (e.g. an upstream 5xx with an error body).
    #[error("Source error: {origin} - {message}")]
    SourceError {
        /// The source that returned the error
        origin: String,
        /// The error message from the source
        message: String,
    },

    /// A network error occurred while communicating with a source.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl PlatformDataError {
    /// Returns the failure classification for this error.
    ///
    /// - [`FailureKind::InvalidIdentity`]: the stored handle is wrong;
    ///   callers clear it and discard any cached data for it
    /// - [`FailureKind::Transport`]: transient; callers keep previously
    ///   rendered data and surface the failure
    /// - [`FailureKind::MalformedPayload`]: the source misbehaved; treated
    ///   like a transport failure by callers, but never like a bad handle
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::InvalidHandle { .. } | Self::EmptyHandle { .. } => FailureKind::InvalidIdentity,
            Self::Network(_) | Self::SourceError { .. } => FailureKind::Transport,
            Self::MalformedPayload { .. } => FailureKind::MalformedPayload,
        }
    }
}
