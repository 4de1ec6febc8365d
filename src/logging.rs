//! Tracing 初始化
//!
//! `RUST_LOG` 优先，否则使用配置中的级别

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

pub fn init_tracing(config: &LogConfig) {
    let log_filter = format!(
        "{},logdeck={},tower_http=debug",
        config.level, config.level
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
