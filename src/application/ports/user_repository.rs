//! User Repository Port - 用户账户持久化抽象

use async_trait::async_trait;
use thiserror::Error;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// 用户账户（用于持久化）
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    /// SQLite `CURRENT_TIMESTAMP` 原样保留，格式为 `YYYY-MM-DD HH:MM:SS`
    pub created_at: String,
}

#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// 建表（幂等）
    async fn ensure_schema(&self) -> Result<(), RepositoryError>;

    /// 按用户名查找
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, RepositoryError>;

    /// 插入新用户，返回自增 ID
    async fn insert(&self, username: &str, password_hash: &str) -> Result<i64, RepositoryError>;
}
