//! Video catalog records.

use serde::{Deserialize, Serialize};

/// One video from the editorial channel catalog.
///
/// Immutable once fetched; matching against contests never mutates the
/// record, it only reads the title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub title: String,
    pub url: String,
}

impl VideoRecord {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}
