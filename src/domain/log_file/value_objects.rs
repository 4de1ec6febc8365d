//! Log File Context - Value Objects

use chrono::{DateTime, Local};
use std::time::SystemTime;

use super::LogFileError;

/// C `ctime` 风格的时间格式，如 `Sun Oct 18 09:05:03 2026`
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// 路径片段中禁止出现的子串
const FORBIDDEN_PATTERNS: &[&str] = &["..", "/", "\\", "\0"];

/// 已校验的日志文件名
///
/// 只做字面子串检查，不做规范化，也不解析符号链接。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileName(String);

impl LogFileName {
    pub fn parse(raw: impl Into<String>) -> Result<Self, LogFileError> {
        let raw = raw.into();
        if raw.is_empty() || FORBIDDEN_PATTERNS.iter().any(|p| raw.contains(p)) {
            return Err(LogFileError::InvalidFilename);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LogFileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 将系统时间格式化为本地时区的 ctime 字符串
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// 当前时间的 ctime 字符串
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_plain_names_accepted() {
        for name in ["app.log", "error-2026.log", ".hidden", "cron job.log"] {
            assert_eq!(LogFileName::parse(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn test_traversal_rejected() {
        for name in [
            "..",
            "../etc/passwd",
            "a..b.log",
            "sub/app.log",
            "/etc/passwd",
            "..\\secret",
            "dir\\app.log",
            "app\0.log",
            "",
        ] {
            assert!(
                matches!(LogFileName::parse(name), Err(LogFileError::InvalidFilename)),
                "expected {name:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_timestamp_layout() {
        let time = Local.with_ymd_and_hms(2026, 10, 8, 9, 5, 3).unwrap();
        let formatted = format_timestamp(SystemTime::from(time));
        assert_eq!(formatted, "Thu Oct  8 09:05:03 2026");
    }
}
