//! Bookmark model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bookmarked contest for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub email: String,
    pub contest_name: String,
    pub created_at: DateTime<Utc>,
}
