//! Domain Layer - 领域层
//!
//! 限界上下文:
//! - Log File Context: 日志文件

pub mod log_file;
