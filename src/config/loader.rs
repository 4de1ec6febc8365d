//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. `DOMAIN` / `DB_PATH` 环境变量
//! 2. `LOGDECK_` 前缀环境变量
//! 3. 配置文件（logdeck.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["logdeck", "logdeck.local"];

/// bcrypt 允许的 cost 范围
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// 加载应用配置
///
/// # 环境变量示例
/// - `LOGDECK_SERVER__PORT=3001`
/// - `LOGDECK_LOGS__DIR=/app/logs`
/// - `LOGDECK_LOGS__SORT_ORDER=modified_time`
/// - `DOMAIN=logs.example.com`（前端来源变为 `http://logs.example.com:3000`）
/// - `DB_PATH=/data/auth.db`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3001)?
        .set_default("logs.dir", "/app/logs")?
        .set_default("logs.sort_order", "formatted_timestamp")?
        .set_default("cors.domain", "localhost")?
        .set_default("cors.frontend_port", 3000)?
        .set_default("database.path", "auth.db")?
        .set_default("database.max_connections", 1)?
        .set_default("bootstrap.username", "crontab")?
        .set_default("bootstrap.password", "crontab123")?
        .set_default("bootstrap.bcrypt_cost", 10)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 前缀环境变量，层级分隔符为双下划线
    builder = builder.add_source(
        Environment::with_prefix("LOGDECK")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 部署脚本沿用的无前缀变量
    builder = builder
        .set_override_option("cors.domain", non_empty_env("DOMAIN"))?
        .set_override_option("database.path", non_empty_env("DB_PATH"))?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.logs.dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Logs directory cannot be empty".to_string(),
        ));
    }

    // 来源会被写进响应头
    let domain = &config.cors.domain;
    if domain.is_empty() || domain.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ConfigError::ValidationError(format!(
            "Invalid CORS domain: {:?}",
            domain
        )));
    }

    if config.database.path.is_empty() {
        return Err(ConfigError::ValidationError(
            "Database path cannot be empty".to_string(),
        ));
    }

    if config.bootstrap.username.trim().is_empty() || config.bootstrap.password.is_empty() {
        return Err(ConfigError::ValidationError(
            "Bootstrap username and password cannot be empty".to_string(),
        ));
    }

    if !BCRYPT_COST_RANGE.contains(&config.bootstrap.bcrypt_cost) {
        return Err(ConfigError::ValidationError(format!(
            "bcrypt cost must be within {}..={}",
            BCRYPT_COST_RANGE.start(),
            BCRYPT_COST_RANGE.end()
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Logs Directory: {}", config.logs.dir.display());
    tracing::info!("Sort Order: {:?}", config.logs.sort_order);
    tracing::info!("Frontend Origin: {}", config.cors.frontend_origin());
    tracing::info!(
        "API Endpoint: http://{}:{}/api/logs",
        config.cors.domain,
        config.server.port
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
