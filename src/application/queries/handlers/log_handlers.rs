//! Log Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::LogDirectoryPort;
use crate::application::queries::{ListLogs, ReadLog};
use crate::domain::log_file::{sort_entries, LogFileEntry, LogFileName, SortOrder};

// ============================================================================
// Response DTOs
// ============================================================================

/// 目录列表结果
#[derive(Debug, Clone)]
pub struct ListLogsResponse {
    pub files: Vec<LogFileEntry>,
    pub total_files: usize,
}

/// 文件内容结果
#[derive(Debug, Clone)]
pub struct ReadLogResponse {
    pub filename: String,
    pub content: String,
    /// 解码后文本的字符数，而不是磁盘字节数
    pub size: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListLogs Handler
pub struct ListLogsHandler {
    log_dir: Arc<dyn LogDirectoryPort>,
    sort_order: SortOrder,
}

impl ListLogsHandler {
    pub fn new(log_dir: Arc<dyn LogDirectoryPort>, sort_order: SortOrder) -> Self {
        Self {
            log_dir,
            sort_order,
        }
    }

    pub async fn handle(&self, _query: ListLogs) -> Result<ListLogsResponse, ApplicationError> {
        let mut files = self.log_dir.list_entries().await?;
        sort_entries(&mut files, self.sort_order);

        tracing::debug!(
            dir = %self.log_dir.root().display(),
            total = files.len(),
            "Log directory listed"
        );

        Ok(ListLogsResponse {
            total_files: files.len(),
            files,
        })
    }
}

/// ReadLog Handler
pub struct ReadLogHandler {
    log_dir: Arc<dyn LogDirectoryPort>,
}

impl ReadLogHandler {
    pub fn new(log_dir: Arc<dyn LogDirectoryPort>) -> Self {
        Self { log_dir }
    }

    pub async fn handle(&self, query: ReadLog) -> Result<ReadLogResponse, ApplicationError> {
        let name = LogFileName::parse(query.filename)?;
        let content = self.log_dir.read_file(&name).await?;

        Ok(ReadLogResponse {
            filename: name.to_string(),
            size: content.chars().count(),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;
    use std::time::{Duration, SystemTime};

    use crate::application::testing::StubLogDirectory;
    use crate::domain::log_file::LogFileError;

    #[tokio::test]
    async fn test_list_counts_and_sorts() {
        let older = SystemTime::UNIX_EPOCH + Duration::from_secs(60);
        let newer = SystemTime::UNIX_EPOCH + Duration::from_secs(86_400 * 400);
        let stub = Arc::new(StubLogDirectory {
            entries: vec![
                LogFileEntry::from_metadata("old.log", 10, older),
                LogFileEntry::from_metadata("new.log", 20, newer),
            ],
            ..Default::default()
        });
        let handler = ListLogsHandler::new(stub, SortOrder::ModifiedTime);

        let result = handler.handle(ListLogs).await.unwrap();
        assert_eq!(result.total_files, 2);
        assert_eq!(result.files.len(), 2);
        assert_eq!(result.files[0].name, "new.log");
    }

    #[tokio::test]
    async fn test_read_size_counts_characters() {
        let stub = Arc::new(StubLogDirectory {
            content: "héllo\n".to_string(),
            ..Default::default()
        });
        let handler = ReadLogHandler::new(stub);

        let result = handler
            .handle(ReadLog {
                filename: "app.log".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(result.filename, "app.log");
        assert_eq!(result.content, "héllo\n");
        assert_eq!(result.size, 6);
    }

    #[tokio::test]
    async fn test_read_rejects_traversal_without_touching_directory() {
        let stub = Arc::new(StubLogDirectory::default());
        let handler = ReadLogHandler::new(stub.clone());

        for name in ["../secret", "a/b.log", ".."] {
            let err = handler
                .handle(ReadLog {
                    filename: name.to_string(),
                })
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                ApplicationError::LogFile(LogFileError::InvalidFilename)
            ));
        }
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }
}
