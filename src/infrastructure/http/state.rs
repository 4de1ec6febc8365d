//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态，构造后只读

use axum::http::HeaderValue;
use std::sync::Arc;

use crate::application::{DeleteLogHandler, ListLogsHandler, LogDirectoryPort, ReadLogHandler};
use crate::domain::log_file::SortOrder;

/// 应用状态
pub struct AppState {
    /// CORS 允许的前端来源，如 `http://localhost:3000`
    pub allow_origin: HeaderValue,

    // ========== Query Handlers ==========
    pub list_logs_handler: ListLogsHandler,
    pub read_log_handler: ReadLogHandler,

    // ========== Command Handlers ==========
    pub delete_log_handler: DeleteLogHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        log_dir: Arc<dyn LogDirectoryPort>,
        sort_order: SortOrder,
        allow_origin: HeaderValue,
    ) -> Self {
        Self {
            allow_origin,

            list_logs_handler: ListLogsHandler::new(log_dir.clone(), sort_order),
            read_log_handler: ReadLogHandler::new(log_dir.clone()),

            delete_log_handler: DeleteLogHandler::new(log_dir),
        }
    }
}
