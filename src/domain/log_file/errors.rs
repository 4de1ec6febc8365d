//! Log File Context - Errors
//!
//! Display 文本即 HTTP 响应中的 `error` 字段

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogFileError {
    #[error("Invalid filename")]
    InvalidFilename,

    #[error("Log file not found")]
    NotFound,

    #[error("Path is not a file")]
    NotAFile,

    #[error("Logs directory not found")]
    DirNotFound,

    #[error("Logs path is not a directory")]
    NotADirectory,

    #[error("Permission denied accessing logs directory")]
    PermissionDenied,

    #[error("Error reading file: {0}")]
    ReadError(String),

    #[error("Error deleting file: {0}")]
    DeleteError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl LogFileError {
    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(LogFileError::InvalidFilename.to_string(), "Invalid filename");
        assert_eq!(LogFileError::NotFound.to_string(), "Log file not found");
        assert_eq!(
            LogFileError::ReadError("boom".to_string()).to_string(),
            "Error reading file: boom"
        );
        assert_eq!(
            LogFileError::internal("oops").to_string(),
            "Internal server error: oops"
        );
    }
}
