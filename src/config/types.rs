//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::log_file::SortOrder;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 日志目录配置
    #[serde(default)]
    pub logs: LogsConfig,

    /// 跨域配置
    #[serde(default)]
    pub cors: CorsConfig,

    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,

    /// 默认账户配置
    #[serde(default)]
    pub bootstrap: BootstrapConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 日志目录配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogsConfig {
    /// 被托管的日志目录
    #[serde(default = "default_logs_dir")]
    pub dir: PathBuf,

    /// 列表排序方式: formatted_timestamp | modified_time
    #[serde(default)]
    pub sort_order: SortOrder,
}

fn default_logs_dir() -> PathBuf {
    PathBuf::from("/app/logs")
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            dir: default_logs_dir(),
            sort_order: SortOrder::default(),
        }
    }
}

/// 跨域配置
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// 前端所在域名，可由 `DOMAIN` 环境变量覆盖
    #[serde(default = "default_domain")]
    pub domain: String,

    /// 前端端口
    #[serde(default = "default_frontend_port")]
    pub frontend_port: u16,
}

fn default_domain() -> String {
    "localhost".to_string()
}

fn default_frontend_port() -> u16 {
    3000
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            frontend_port: default_frontend_port(),
        }
    }
}

impl CorsConfig {
    /// 允许的前端来源
    pub fn frontend_origin(&self) -> String {
        format!("http://{}:{}", self.domain, self.frontend_port)
    }
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// 数据库文件路径，可由 `DB_PATH` 环境变量覆盖
    #[serde(default = "default_db_path")]
    pub path: String,

    /// 最大连接数
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_db_path() -> String {
    "auth.db".to_string()
}

fn default_max_connections() -> u32 {
    1
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    /// 获取数据库 URL
    pub fn database_url(&self) -> String {
        format!("sqlite:{}?mode=rwc", self.path)
    }
}

/// 默认账户配置
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapConfig {
    #[serde(default = "default_username")]
    pub username: String,

    #[serde(default = "default_password")]
    pub password: String,

    /// bcrypt cost
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

fn default_username() -> String {
    "crontab".to_string()
}

fn default_password() -> String {
    "crontab123".to_string()
}

fn default_bcrypt_cost() -> u32 {
    10
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
