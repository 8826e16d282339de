//! Database model for contest bookmarks.

use chrono::{NaiveDateTime, TimeZone, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use kodekaro_core::bookmarks::Bookmark;

/// Database model for bookmarks
#[derive(
    Queryable, Identifiable, Insertable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::bookmarks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BookmarkDB {
    pub id: String,
    pub email: String,
    pub contest_name: String,
    pub created_at: NaiveDateTime,
}

impl From<BookmarkDB> for Bookmark {
    fn from(db: BookmarkDB) -> Self {
        Self {
            id: db.id,
            email: db.email,
            contest_name: db.contest_name,
            created_at: Utc.from_utc_datetime(&db.created_at),
        }
    }
}
