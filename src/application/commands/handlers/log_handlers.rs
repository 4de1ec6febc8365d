//! Log Command Handlers

use std::sync::Arc;

use crate::application::commands::DeleteLog;
use crate::application::error::ApplicationError;
use crate::application::ports::LogDirectoryPort;
use crate::domain::log_file::LogFileName;

/// 删除结果
#[derive(Debug, Clone)]
pub struct DeleteLogResponse {
    pub filename: String,
}

/// DeleteLog Handler
pub struct DeleteLogHandler {
    log_dir: Arc<dyn LogDirectoryPort>,
}

impl DeleteLogHandler {
    pub fn new(log_dir: Arc<dyn LogDirectoryPort>) -> Self {
        Self { log_dir }
    }

    pub async fn handle(&self, command: DeleteLog) -> Result<DeleteLogResponse, ApplicationError> {
        let name = LogFileName::parse(command.filename)?;
        self.log_dir.delete_file(&name).await?;

        tracing::info!(
            filename = %name,
            dir = %self.log_dir.root().display(),
            "Log file deleted"
        );

        Ok(DeleteLogResponse {
            filename: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    use crate::application::testing::StubLogDirectory;
    use crate::domain::log_file::LogFileError;

    #[tokio::test]
    async fn test_delete_passes_validated_name() {
        let stub = Arc::new(StubLogDirectory::default());
        let handler = DeleteLogHandler::new(stub.clone());

        let result = handler
            .handle(DeleteLog {
                filename: "app.log".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(result.filename, "app.log");
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_delete_rejects_traversal_without_touching_directory() {
        let stub = Arc::new(StubLogDirectory::default());
        let handler = DeleteLogHandler::new(stub.clone());

        let err = handler
            .handle(DeleteLog {
                filename: "../../etc/passwd".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::LogFile(LogFileError::InvalidFilename)
        ));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }
}
