//! logdeck - 日志目录 HTTP 服务
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Log File Context: 文件名校验、条目、排序、错误分类
//!
//! 应用层 (application/):
//! - Ports: LogDirectory, UserRepository, PasswordHasher
//! - Queries: 列表、读取
//! - Commands: 删除、默认账户初始化
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + CORS
//! - Adapters: 文件系统日志目录、bcrypt
//! - Persistence: SQLite 账户表

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

pub use config::{load_config, AppConfig};
