//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::any::Any;

use crate::application::ApplicationError;
use crate::domain::log_file::{now_timestamp, LogFileError};

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            timestamp: now_timestamp(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    /// 未匹配任何路由
    pub fn route_not_found() -> Self {
        Self::NotFound("Not found".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match self {
            ApiError::NotFound(msg) => {
                tracing::debug!(error = %msg, "Resource not found");
                msg
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                msg
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                msg
            }
        };

        (status, Json(ErrorResponse::new(msg))).into_response()
    }
}

impl From<LogFileError> for ApiError {
    fn from(e: LogFileError) -> Self {
        let msg = e.to_string();
        match e {
            LogFileError::InvalidFilename | LogFileError::NotAFile => ApiError::BadRequest(msg),
            LogFileError::NotFound => ApiError::NotFound(msg),
            LogFileError::DirNotFound
            | LogFileError::NotADirectory
            | LogFileError::PermissionDenied
            | LogFileError::ReadError(_)
            | LogFileError::DeleteError(_)
            | LogFileError::InternalError(_) => ApiError::Internal(msg),
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::LogFile(e) => ApiError::from(e),
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            other => ApiError::from(LogFileError::internal(other.to_string())),
        }
    }
}

/// 处理器 panic 时的兜底响应，监听器本身不受影响
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::from(LogFileError::internal(detail)).into_response()
}
