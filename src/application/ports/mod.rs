//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod log_directory;
mod password_hasher;
mod user_repository;

pub use log_directory::LogDirectoryPort;
pub use password_hasher::{HashError, PasswordHasherPort};
pub use user_repository::{RepositoryError, UserRecord, UserRepositoryPort};
