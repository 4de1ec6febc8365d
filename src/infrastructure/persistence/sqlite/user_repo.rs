//! SQLite User Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::{run_migrations, DbPool};
use crate::application::ports::{RepositoryError, UserRecord, UserRepositoryPort};

/// SQLite User Repository
pub struct SqliteUserRepository {
    pool: DbPool,
}

impl SqliteUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password: String,
    created_at: String,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        UserRecord {
            id: row.id,
            username: row.username,
            password_hash: row.password,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl UserRepositoryPort for SqliteUserRepository {
    async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        run_migrations(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, RepositoryError> {
        // DATETIME 列显式转为 TEXT 再解码
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, username, password, CAST(created_at AS TEXT) AS created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(UserRecord::from))
    }

    async fn insert(&self, username: &str, password_hash: &str) -> Result<i64, RepositoryError> {
        let result = sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| match e.as_database_error() {
                Some(db_err) if db_err.is_unique_violation() => {
                    RepositoryError::Duplicate(username.to_string())
                }
                _ => RepositoryError::DatabaseError(e.to_string()),
            })?;

        Ok(result.last_insert_rowid())
    }
}
