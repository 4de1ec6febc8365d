//! 测试用端口桩

use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::LogDirectoryPort;
use crate::domain::log_file::{LogFileEntry, LogFileError, LogFileName};

/// 记录调用次数的目录桩
#[derive(Default)]
pub(crate) struct StubLogDirectory {
    pub calls: AtomicUsize,
    pub entries: Vec<LogFileEntry>,
    pub content: String,
}

#[async_trait]
impl LogDirectoryPort for StubLogDirectory {
    fn root(&self) -> &Path {
        Path::new("/stub")
    }

    async fn list_entries(&self) -> Result<Vec<LogFileEntry>, LogFileError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.clone())
    }

    async fn read_file(&self, _name: &LogFileName) -> Result<String, LogFileError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.content.clone())
    }

    async fn delete_file(&self, _name: &LogFileName) -> Result<(), LogFileError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
