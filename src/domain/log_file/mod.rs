//! Log File Context - 日志文件限界上下文
//!
//! 职责:
//! - 文件名校验（路径穿越防护）
//! - 日志文件条目与排序规则
//! - 日志文件错误分类

mod entities;
mod errors;
mod value_objects;

pub use entities::{sort_entries, LogFileEntry, SortOrder};
pub use errors::LogFileError;
pub use value_objects::{format_timestamp, now_timestamp, LogFileName};
