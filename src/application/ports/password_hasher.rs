//! Password Hasher Port - 密码哈希抽象

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HashError {
    #[error("Failed to hash password: {0}")]
    Hash(String),

    #[error("Failed to verify password: {0}")]
    Verify(String),
}

pub trait PasswordHasherPort: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, HashError>;

    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
