//! Log Commands

/// 删除日志文件命令
///
/// `filename` 为 URL 中取出的原始片段，尚未校验
#[derive(Debug, Clone)]
pub struct DeleteLog {
    pub filename: String,
}
