//! HTTP Routes
//!
//! API Endpoints:
//! - /api/logs          GET     列出日志目录
//! - /api/logs/{name}   GET     读取日志文件
//! - /api/logs/{name}   DELETE  删除日志文件
//! - \*                 OPTIONS CORS 预检（见 middleware）
//!
//! 其余组合一律 404 `{"error": "Not found"}`，包括已知路径上的未知方法。
//! axum 的 `get` 会隐式应答 HEAD，这里显式把 HEAD 也指向 404。

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/logs",
            get(handlers::list_logs)
                .head(handlers::not_found)
                .fallback(handlers::not_found),
        )
        .route(
            "/api/logs/",
            get(handlers::read_log_missing_name)
                .head(handlers::not_found)
                .delete(handlers::delete_log_missing_name)
                .fallback(handlers::not_found),
        )
        // 通配捕获整个剩余路径，含 `/` 的文件名交给校验器拒绝
        .route(
            "/api/logs/*name",
            get(handlers::read_log)
                .head(handlers::not_found)
                .delete(handlers::delete_log)
                .fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
}
