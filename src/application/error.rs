//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{HashError, RepositoryError};
use crate::domain::log_file::LogFileError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 日志文件领域错误，原样透传给 HTTP 层
    #[error(transparent)]
    LogFile(#[from] LogFileError),

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 密码哈希错误
    #[error("Hashing error: {0}")]
    HashingError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

impl From<HashError> for ApplicationError {
    fn from(err: HashError) -> Self {
        Self::HashingError(err.to_string())
    }
}
