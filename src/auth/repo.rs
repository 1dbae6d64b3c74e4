use async_trait::async_trait;
use sqlx::PgPool;

use crate::auth::repo_types::{StoreError, User};

/// Persistent table of users keyed by unique username.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user. A duplicate username surfaces as [`StoreError::UsernameTaken`].
    async fn insert(&self, username: &str, password_hash: &str) -> Result<User, StoreError>;

    /// Find the user with exactly this username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, username: &str, password_hash: &str) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                StoreError::UsernameTaken
            }
            other => StoreError::Database(other),
        })?;
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }
}
