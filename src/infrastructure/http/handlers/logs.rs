//! Log HTTP Handlers
//!
//! 文件名取自通配路径段，由 `Path` 提取器做百分号解码后再交给校验器：
//! `/api/logs/a%20b.log` 读的是 `a b.log`，名字里本身带 `%` 的文件要写成 `%25`。

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::application::{DeleteLog, ListLogs, ReadLog};
use crate::domain::log_file::LogFileError;
use crate::infrastructure::http::dto::{DeleteLogBody, ListLogsBody, ReadLogBody};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

const NO_CACHE: &str = "no-cache, no-store, must-revalidate";

/// 取出路径中的文件名；无法解码的片段按非法文件名处理
fn filename(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    match path {
        Ok(Path(name)) => Ok(name),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Undecodable log filename");
            Err(LogFileError::InvalidFilename.into())
        }
    }
}

/// 列出日志目录
pub async fn list_logs(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let result = state.list_logs_handler.handle(ListLogs).await?;

    Ok((
        [(header::CACHE_CONTROL, NO_CACHE)],
        Json(ListLogsBody::from(result)),
    ))
}

/// 读取单个日志文件
pub async fn read_log(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ReadLog {
        filename: filename(path)?,
    };
    let result = state.read_log_handler.handle(query).await?;

    Ok((
        [(header::CACHE_CONTROL, NO_CACHE)],
        Json(ReadLogBody::from(result)),
    ))
}

/// 删除单个日志文件
pub async fn delete_log(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<DeleteLogBody>, ApiError> {
    let command = DeleteLog {
        filename: filename(path)?,
    };
    let result = state.delete_log_handler.handle(command).await?;

    Ok(Json(DeleteLogBody::from(result)))
}

/// `GET /api/logs/`：文件名为空
pub async fn read_log_missing_name() -> ApiError {
    ApiError::NotFound(LogFileError::InvalidFilename.to_string())
}

/// `DELETE /api/logs/`：文件名为空
pub async fn delete_log_missing_name() -> ApiError {
    ApiError::BadRequest(LogFileError::InvalidFilename.to_string())
}

/// 其余所有方法/路径组合
pub async fn not_found() -> ApiError {
    ApiError::route_not_found()
}
