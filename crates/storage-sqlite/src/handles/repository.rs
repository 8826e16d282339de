use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;

use super::model::UserDB;
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::users;

use kodekaro_core::errors::Result;
use kodekaro_core::handles::{HandleStore, PlatformHandles};
use kodekaro_platform_data::Platform;

pub struct SqliteHandleRepository {
    pool: Arc<DbPool>,
}

impl SqliteHandleRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SqliteHandleRepository { pool }
    }
}

#[async_trait]
impl HandleStore for SqliteHandleRepository {
    async fn get_for_user(&self, uid: &str) -> Result<Option<PlatformHandles>> {
        let mut conn = get_connection(&self.pool)?;
        let row: Option<UserDB> = users::table
            .find(uid)
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(PlatformHandles::from))
    }

    async fn save_handle(
        &self,
        uid: &str,
        user_email: &str,
        platform: Platform,
        handle: Option<&str>,
    ) -> Result<PlatformHandles> {
        let mut conn = get_connection(&self.pool)?;
        let now = Utc::now().naive_utc();

        let existing: Option<UserDB> = users::table
            .find(uid)
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()?;

        let mut row = existing.unwrap_or(UserDB {
            user_id: uid.to_string(),
            email: user_email.to_string(),
            codeforces_username: None,
            leetcode_username: None,
            codechef_username: None,
            created_at: now,
            updated_at: now,
        });
        row.email = user_email.to_string();
        row.updated_at = now;
        match platform {
            Platform::Codeforces => row.codeforces_username = handle.map(str::to_string),
            Platform::Leetcode => row.leetcode_username = handle.map(str::to_string),
            Platform::Codechef => row.codechef_username = handle.map(str::to_string),
        }

        diesel::replace_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .into_core()?;
        Ok(row.into())
    }

    async fn clear_handle_matching(&self, platform: Platform, handle: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        let now = Utc::now().naive_utc();

        let cleared = match platform {
            Platform::Codeforces => diesel::update(
                users::table.filter(users::codeforces_username.eq(handle)),
            )
            .set((
                users::codeforces_username.eq(None::<String>),
                users::updated_at.eq(now),
            ))
            .execute(&mut conn),
            Platform::Leetcode => diesel::update(
                users::table.filter(users::leetcode_username.eq(handle)),
            )
            .set((
                users::leetcode_username.eq(None::<String>),
                users::updated_at.eq(now),
            ))
            .execute(&mut conn),
            Platform::Codechef => diesel::update(
                users::table.filter(users::codechef_username.eq(handle)),
            )
            .set((
                users::codechef_username.eq(None::<String>),
                users::updated_at.eq(now),
            ))
            .execute(&mut conn),
        }
        .into_core()?;

        Ok(cleared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn test_repo() -> (tempfile::TempDir, SqliteHandleRepository) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("handles.db");
        let pool = db::init(path.to_str().unwrap()).unwrap();
        (dir, SqliteHandleRepository::new(pool))
    }

    #[tokio::test]
    async fn test_save_creates_row_then_updates_one_column() {
        let (_dir, repo) = test_repo();

        assert_eq!(repo.get_for_user("u1").await.unwrap(), None);

        let saved = repo
            .save_handle("u1", "a@x.dev", Platform::Codeforces, Some("alice_cf"))
            .await
            .unwrap();
        assert_eq!(saved.codeforces.as_deref(), Some("alice_cf"));
        assert_eq!(saved.leetcode, None);

        let saved = repo
            .save_handle("u1", "a@x.dev", Platform::Leetcode, Some("alice_lc"))
            .await
            .unwrap();
        assert_eq!(saved.codeforces.as_deref(), Some("alice_cf"));
        assert_eq!(saved.leetcode.as_deref(), Some("alice_lc"));

        let loaded = repo.get_for_user("u1").await.unwrap().unwrap();
        assert_eq!(loaded, saved);
    }

    #[tokio::test]
    async fn test_save_with_none_clears_column() {
        let (_dir, repo) = test_repo();

        repo.save_handle("u1", "a@x.dev", Platform::Codechef, Some("chef"))
            .await
            .unwrap();
        let saved = repo
            .save_handle("u1", "a@x.dev", Platform::Codechef, None)
            .await
            .unwrap();
        assert_eq!(saved.codechef, None);
    }

    #[tokio::test]
    async fn test_clear_handle_matching_is_idempotent() {
        let (_dir, repo) = test_repo();

        repo.save_handle("u1", "a@x.dev", Platform::Codeforces, Some("ghost"))
            .await
            .unwrap();
        repo.save_handle("u1", "a@x.dev", Platform::Leetcode, Some("alive"))
            .await
            .unwrap();

        let cleared = repo
            .clear_handle_matching(Platform::Codeforces, "ghost")
            .await
            .unwrap();
        assert_eq!(cleared, 1);

        // Second pass matches nothing and changes nothing.
        let cleared = repo
            .clear_handle_matching(Platform::Codeforces, "ghost")
            .await
            .unwrap();
        assert_eq!(cleared, 0);

        let loaded = repo.get_for_user("u1").await.unwrap().unwrap();
        assert_eq!(loaded.codeforces, None);
        assert_eq!(loaded.leetcode.as_deref(), Some("alive"));
    }

    #[tokio::test]
    async fn test_clear_does_not_touch_other_users_different_handle() {
        let (_dir, repo) = test_repo();

        repo.save_handle("u1", "a@x.dev", Platform::Codeforces, Some("ghost"))
            .await
            .unwrap();
        repo.save_handle("u2", "b@x.dev", Platform::Codeforces, Some("other"))
            .await
            .unwrap();

        repo.clear_handle_matching(Platform::Codeforces, "ghost")
            .await
            .unwrap();

        let other = repo.get_for_user("u2").await.unwrap().unwrap();
        assert_eq!(other.codeforces.as_deref(), Some("other"));
    }
}
