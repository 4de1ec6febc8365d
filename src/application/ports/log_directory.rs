//! Log Directory Port - 日志目录抽象
//!
//! 定义日志目录的枚举、读取、删除接口，具体实现在 infrastructure/storage 层

use async_trait::async_trait;
use std::path::Path;

use crate::domain::log_file::{LogFileEntry, LogFileError, LogFileName};

/// 日志目录端口
///
/// 所有文件名参数都已通过 [`LogFileName`] 校验，实现方不得再接受原始字符串。
#[async_trait]
pub trait LogDirectoryPort: Send + Sync {
    /// 日志目录根路径
    fn root(&self) -> &Path;

    /// 枚举目录下所有条目（未排序）
    ///
    /// 单个条目 stat 失败不会中断枚举，而是产生带 `error` 的条目。
    async fn list_entries(&self) -> Result<Vec<LogFileEntry>, LogFileError>;

    /// 读取文件的文本内容（非法 UTF-8 字节被丢弃）
    async fn read_file(&self, name: &LogFileName) -> Result<String, LogFileError>;

    /// 删除文件
    async fn delete_file(&self, name: &LogFileName) -> Result<(), LogFileError>;
}
