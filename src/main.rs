//! logdeck - 日志目录 HTTP 服务
//!
//! 列出、读取、删除固定目录下的日志文件

use std::sync::Arc;

use axum::http::HeaderValue;
use logdeck::config::{load_config, print_config};
use logdeck::infrastructure::http::{AppState, HttpServer, ServerConfig};
use logdeck::infrastructure::FsLogDirectory;
use logdeck::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("logdeck - log directory server");
    print_config(&config);

    if !config.logs.dir.is_dir() {
        // 不阻止启动，列表请求会返回 500
        tracing::warn!(dir = %config.logs.dir.display(), "Logs directory is not available yet");
    }

    let allow_origin = HeaderValue::from_str(&config.cors.frontend_origin())?;
    let log_dir = Arc::new(FsLogDirectory::new(&config.logs.dir));
    let state = AppState::new(log_dir, config.logs.sort_order, allow_origin);

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
