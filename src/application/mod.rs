//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（LogDirectory、UserRepository、PasswordHasher）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use commands::{
    BootstrapDefaultUser,
    DeleteLog,
    // Handlers
    handlers::{BootstrapOutcome, BootstrapUserHandler, DeleteLogHandler, DeleteLogResponse},
};

pub use error::ApplicationError;

pub use ports::{
    HashError, LogDirectoryPort, PasswordHasherPort, RepositoryError, UserRecord,
    UserRepositoryPort,
};

pub use queries::{
    ListLogs,
    ReadLog,
    // Handlers
    handlers::{ListLogsHandler, ListLogsResponse, ReadLogHandler, ReadLogResponse},
};
