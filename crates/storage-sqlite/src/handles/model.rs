//! Database model for user platform handles.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use kodekaro_core::handles::PlatformHandles;

/// Database model for users
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::users)]
#[diesel(primary_key(user_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub user_id: String,
    pub email: String,
    pub codeforces_username: Option<String>,
    pub leetcode_username: Option<String>,
    pub codechef_username: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<UserDB> for PlatformHandles {
    fn from(db: UserDB) -> Self {
        Self {
            user_id: db.user_id,
            email: db.email,
            codeforces: db.codeforces_username,
            leetcode: db.leetcode_username,
            codechef: db.codechef_username,
        }
    }
}
