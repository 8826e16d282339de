use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use super::model::BookmarkDB;
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::bookmarks;

use kodekaro_core::bookmarks::{Bookmark, BookmarkStore};
use kodekaro_core::errors::Result;

pub struct SqliteBookmarkRepository {
    pool: Arc<DbPool>,
}

impl SqliteBookmarkRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SqliteBookmarkRepository { pool }
    }
}

#[async_trait]
impl BookmarkStore for SqliteBookmarkRepository {
    async fn list_for_user(&self, user_email: &str) -> Result<Vec<Bookmark>> {
        let mut conn = get_connection(&self.pool)?;
        let rows: Vec<BookmarkDB> = bookmarks::table
            .filter(bookmarks::email.eq(user_email))
            .order(bookmarks::created_at.asc())
            .load::<BookmarkDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Bookmark::from).collect())
    }

    async fn add(&self, user_email: &str, contest: &str) -> Result<Bookmark> {
        let row = BookmarkDB {
            id: Uuid::new_v4().to_string(),
            email: user_email.to_string(),
            contest_name: contest.to_string(),
            created_at: Utc::now().naive_utc(),
        };

        let mut conn = get_connection(&self.pool)?;
        diesel::insert_into(bookmarks::table)
            .values(&row)
            .execute(&mut conn)
            .into_core()?;
        Ok(row.into())
    }

    async fn remove(&self, user_email: &str, contest: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::delete(
            bookmarks::table
                .filter(bookmarks::email.eq(user_email))
                .filter(bookmarks::contest_name.eq(contest)),
        )
        .execute(&mut conn)
        .into_core()?;
        Ok(())
    }
}
