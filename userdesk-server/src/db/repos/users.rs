//! User repository
//!
//! - list: all rows, ordered by id
//! - create: INSERT ... RETURNING (store assigns the id)
//! - delete: single DELETE, reports whether a row went away

use sqlx::SqlitePool;

use crate::models::{NewUser, User};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All users, ordered by id.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, dob FROM users ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(users)
    }

    /// Get a single user by id.
    pub async fn get(&self, id: i64) -> Result<User, DbError> {
        sqlx::query_as::<_, User>("SELECT id, name, dob FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "user",
                id: id.to_string(),
            })
    }

    /// Insert a user and return it with its assigned id.
    pub async fn create(&self, user: NewUser) -> Result<User, DbError> {
        let created = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, dob) VALUES (?, ?) RETURNING id, name, dob",
        )
        .bind(user.name)
        .bind(user.dob)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id = created.id, name = %created.name, "user created");
        Ok(created)
    }

    /// Delete a user by id. Deleting a missing id is not an error;
    /// the return value says whether a row was removed.
    pub async fn delete(&self, id: i64) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        tracing::debug!(id, deleted, "user delete");
        Ok(deleted)
    }

    /// Number of stored users.
    pub async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::db::{create_memory_pool, ensure_schema, seed_users};

    async fn seeded_pool() -> SqlitePool {
        let pool = create_memory_pool().await.unwrap();
        ensure_schema(&pool).await.unwrap();
        seed_users(&pool).await.unwrap();
        pool
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let pool = seeded_pool().await;
        let users = UserRepo::new(&pool).list().await.unwrap();

        let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(users[0].name, "John");
        assert_eq!(users[0].dob, date(1990, 1, 1));
    }

    #[tokio::test]
    async fn create_assigns_next_id() {
        let pool = seeded_pool().await;
        let repo = UserRepo::new(&pool);

        let amy = repo
            .create(NewUser::new("Amy", date(1994, 1, 1)))
            .await
            .unwrap();

        assert_eq!(amy.id, 5);
        assert_eq!(repo.count().await.unwrap(), 5);
        assert_eq!(repo.get(5).await.unwrap(), amy);
    }

    #[tokio::test]
    async fn duplicate_names_are_allowed() {
        let pool = seeded_pool().await;
        let repo = UserRepo::new(&pool);

        let twin = repo
            .create(NewUser::new("John", date(1990, 1, 1)))
            .await
            .unwrap();

        assert_ne!(twin.id, 1);
        assert_eq!(repo.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let pool = seeded_pool().await;
        let err = UserRepo::new(&pool).get(99).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "user", ref id } if id == "99"));
    }

    #[tokio::test]
    async fn delete_existing_then_missing() {
        let pool = seeded_pool().await;
        let repo = UserRepo::new(&pool);

        assert!(repo.delete(3).await.unwrap());
        assert!(matches!(repo.get(3).await, Err(DbError::NotFound { .. })));
        assert!(!repo.delete(3).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 3);
    }
}
