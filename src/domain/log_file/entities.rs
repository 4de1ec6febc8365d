//! Log File Context - Entities

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use super::value_objects::format_timestamp;

/// 目录列表中的单个条目
///
/// 每次列表请求现场生成，不做持久化。
#[derive(Debug, Clone, Serialize)]
pub struct LogFileEntry {
    pub name: String,
    pub size: u64,
    #[serde(rename = "lastModified")]
    pub last_modified: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// 原始修改时间，仅用于数值排序
    #[serde(skip)]
    pub modified: SystemTime,
}

impl LogFileEntry {
    /// stat 成功的条目
    pub fn from_metadata(name: impl Into<String>, size: u64, modified: SystemTime) -> Self {
        Self {
            name: name.into(),
            size,
            last_modified: format_timestamp(modified),
            error: None,
            modified,
        }
    }

    /// stat 失败的条目：大小为 0，时间取当前时间
    pub fn unreadable(name: impl Into<String>, error: impl Into<String>) -> Self {
        let now = SystemTime::now();
        Self {
            name: name.into(),
            size: 0,
            last_modified: format_timestamp(now),
            error: Some(error.into()),
            modified: now,
        }
    }
}

/// 列表排序方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// 按格式化后的时间字符串字典序降序（与旧版行为一致）
    #[default]
    FormattedTimestamp,
    /// 按真实修改时间降序，最新的在前
    ModifiedTime,
}

/// 就地排序，相等元素保持原有顺序
pub fn sort_entries(entries: &mut [LogFileEntry], order: SortOrder) {
    match order {
        SortOrder::FormattedTimestamp => {
            entries.sort_by(|a, b| b.last_modified.cmp(&a.last_modified))
        }
        SortOrder::ModifiedTime => entries.sort_by(|a, b| b.modified.cmp(&a.modified)),
    }
}
