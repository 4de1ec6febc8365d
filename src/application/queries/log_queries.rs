//! Log Queries

/// 列出日志目录查询
#[derive(Debug, Clone)]
pub struct ListLogs;

/// 读取单个日志文件查询
///
/// `filename` 为 URL 中取出的原始片段，尚未校验
#[derive(Debug, Clone)]
pub struct ReadLog {
    pub filename: String,
}
