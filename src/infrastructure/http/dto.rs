//! Data Transfer Objects
//!
//! 各端点的 JSON 响应体，字段顺序即输出顺序

use serde::Serialize;

use crate::application::{DeleteLogResponse, ListLogsResponse, ReadLogResponse};
use crate::domain::log_file::{now_timestamp, LogFileEntry};

/// 列表响应中的固定说明
pub const LIST_MESSAGE: &str = "Logs served by logdeck server";

#[derive(Debug, Serialize)]
pub struct ListLogsBody {
    pub files: Vec<LogFileEntry>,
    pub message: &'static str,
    pub timestamp: String,
    pub total_files: usize,
}

impl From<ListLogsResponse> for ListLogsBody {
    fn from(result: ListLogsResponse) -> Self {
        Self {
            files: result.files,
            message: LIST_MESSAGE,
            timestamp: now_timestamp(),
            total_files: result.total_files,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReadLogBody {
    pub filename: String,
    pub content: String,
    pub size: usize,
    pub timestamp: String,
}

impl From<ReadLogResponse> for ReadLogBody {
    fn from(result: ReadLogResponse) -> Self {
        Self {
            filename: result.filename,
            content: result.content,
            size: result.size,
            timestamp: now_timestamp(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteLogBody {
    pub message: String,
    pub filename: String,
    pub timestamp: String,
}

impl From<DeleteLogResponse> for DeleteLogBody {
    fn from(result: DeleteLogResponse) -> Self {
        Self {
            message: format!("Log file {} deleted successfully", result.filename),
            filename: result.filename,
            timestamp: now_timestamp(),
        }
    }
}
