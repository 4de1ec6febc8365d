//! File Log Directory - 文件系统日志目录实现
//!
//! 实现 LogDirectoryPort trait

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::LogDirectoryPort;
use crate::domain::log_file::{LogFileEntry, LogFileError, LogFileName};

/// 文件系统日志目录
pub struct FsLogDirectory {
    /// 日志目录根路径
    root: PathBuf,
}

impl FsLogDirectory {
    /// 创建日志目录适配器（不检查目录是否存在，检查推迟到每次请求）
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// 定位一个已存在的普通文件
    ///
    /// 路径不存在返回 `NotFound`，存在但不是普通文件返回 `NotAFile`，
    /// 其余 stat 错误交给 `on_error` 转换。
    async fn locate_file(
        &self,
        name: &LogFileName,
        on_error: fn(String) -> LogFileError,
    ) -> Result<PathBuf, LogFileError> {
        let path = self.root.join(name.as_str());

        let metadata = match fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(LogFileError::NotFound),
            Err(e) => return Err(on_error(e.to_string())),
        };

        if !metadata.is_file() {
            return Err(LogFileError::NotAFile);
        }

        Ok(path)
    }
}

/// UTF-8 解码，丢弃非法字节序列
fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e
            .as_bytes()
            .utf8_chunks()
            .map(|chunk| chunk.valid())
            .collect(),
    }
}

#[async_trait]
impl LogDirectoryPort for FsLogDirectory {
    fn root(&self) -> &Path {
        &self.root
    }

    async fn list_entries(&self) -> Result<Vec<LogFileEntry>, LogFileError> {
        let metadata = match fs::metadata(&self.root).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(LogFileError::DirNotFound),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                return Err(LogFileError::PermissionDenied)
            }
            Err(e) => return Err(LogFileError::internal(e.to_string())),
        };

        if !metadata.is_dir() {
            return Err(LogFileError::NotADirectory);
        }

        let mut dir = fs::read_dir(&self.root).await.map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => LogFileError::PermissionDenied,
            _ => LogFileError::internal(e.to_string()),
        })?;

        let mut entries = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| LogFileError::internal(e.to_string()))?
        {
            let name = entry.file_name().to_string_lossy().into_owned();

            // fs::metadata 跟随符号链接，与目录中看到的目标文件保持一致
            let stat = fs::metadata(entry.path())
                .await
                .and_then(|m| m.modified().map(|modified| (m.len(), modified)));

            match stat {
                Ok((size, modified)) => {
                    entries.push(LogFileEntry::from_metadata(name, size, modified));
                }
                Err(e) => {
                    tracing::warn!(file = %name, error = %e, "Failed to stat log file");
                    entries.push(LogFileEntry::unreadable(name, e.to_string()));
                }
            }
        }

        Ok(entries)
    }

    async fn read_file(&self, name: &LogFileName) -> Result<String, LogFileError> {
        let path = self.locate_file(name, LogFileError::ReadError).await?;

        let bytes = fs::read(&path)
            .await
            .map_err(|e| LogFileError::ReadError(e.to_string()))?;

        tracing::debug!(file = %name, bytes = bytes.len(), "Read log file");

        Ok(decode_lossy(bytes))
    }

    async fn delete_file(&self, name: &LogFileName) -> Result<(), LogFileError> {
        let path = self.locate_file(name, LogFileError::DeleteError).await?;

        fs::remove_file(&path)
            .await
            .map_err(|e| LogFileError::DeleteError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn name(raw: &str) -> LogFileName {
        LogFileName::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn test_list_reports_size_and_timestamp() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join("app.log"), "hello\n").unwrap();
        std::fs::write(temp_dir.path().join("cron.log"), "").unwrap();

        let dir = FsLogDirectory::new(temp_dir.path());
        let mut entries = dir.list_entries().await.unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "app.log");
        assert_eq!(entries[0].size, 6);
        assert!(entries[0].error.is_none());
        assert!(!entries[0].last_modified.is_empty());
        assert_eq!(entries[1].size, 0);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_list_keeps_going_after_stat_failure() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join("a.log"), "a").unwrap();
        std::fs::write(temp_dir.path().join("b.log"), "bb").unwrap();
        std::os::unix::fs::symlink(
            temp_dir.path().join("missing-target"),
            temp_dir.path().join("dangling.log"),
        )
        .unwrap();

        let dir = FsLogDirectory::new(temp_dir.path());
        let entries = dir.list_entries().await.unwrap();
        assert_eq!(entries.len(), 3);

        let dangling = entries.iter().find(|e| e.name == "dangling.log").unwrap();
        assert_eq!(dangling.size, 0);
        assert!(dangling.error.is_some());

        let healthy = entries.iter().filter(|e| e.error.is_none()).count();
        assert_eq!(healthy, 2);
    }

    #[tokio::test]
    async fn test_list_missing_directory() {
        let temp_dir = tempdir().unwrap();
        let dir = FsLogDirectory::new(temp_dir.path().join("nope"));
        assert!(matches!(
            dir.list_entries().await,
            Err(LogFileError::DirNotFound)
        ));
    }

    #[tokio::test]
    async fn test_list_path_is_a_file() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();

        let dir = FsLogDirectory::new(&file);
        assert!(matches!(
            dir.list_entries().await,
            Err(LogFileError::NotADirectory)
        ));
    }

    #[tokio::test]
    async fn test_read_drops_invalid_utf8() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join("mixed.log"), b"ok\xff\xfe done\n").unwrap();

        let dir = FsLogDirectory::new(temp_dir.path());
        let content = dir.read_file(&name("mixed.log")).await.unwrap();
        assert_eq!(content, "ok done\n");
    }

    #[tokio::test]
    async fn test_read_missing_and_directory() {
        let temp_dir = tempdir().unwrap();
        std::fs::create_dir(temp_dir.path().join("archive")).unwrap();

        let dir = FsLogDirectory::new(temp_dir.path());
        assert!(matches!(
            dir.read_file(&name("ghost.log")).await,
            Err(LogFileError::NotFound)
        ));
        assert!(matches!(
            dir.read_file(&name("archive")).await,
            Err(LogFileError::NotAFile)
        ));
    }

    #[cfg(unix)]
    fn set_mode(path: &Path, mode: u32) {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).unwrap();
    }

    // 以 root 运行时权限位不生效，相关用例直接跳过

    #[cfg(unix)]
    #[tokio::test]
    async fn test_list_unreadable_directory() {
        let temp_dir = tempdir().unwrap();
        let logs = temp_dir.path().join("logs");
        std::fs::create_dir(&logs).unwrap();
        set_mode(&logs, 0o000);

        if std::fs::read_dir(&logs).is_ok() {
            set_mode(&logs, 0o755);
            return;
        }

        let result = FsLogDirectory::new(&logs).list_entries().await;
        set_mode(&logs, 0o755);
        assert!(matches!(result, Err(LogFileError::PermissionDenied)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_read_unreadable_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("locked.log");
        std::fs::write(&path, "secret").unwrap();
        set_mode(&path, 0o000);

        if std::fs::read(&path).is_ok() {
            return;
        }

        let dir = FsLogDirectory::new(temp_dir.path());
        match dir.read_file(&name("locked.log")).await {
            Err(LogFileError::ReadError(msg)) => assert!(!msg.is_empty()),
            other => panic!("expected ReadError, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_delete_in_read_only_directory() {
        let temp_dir = tempdir().unwrap();
        let logs = temp_dir.path().join("logs");
        std::fs::create_dir(&logs).unwrap();
        std::fs::write(logs.join("keep.log"), "x").unwrap();
        set_mode(&logs, 0o555);

        let write_check = logs.join(".write-check");
        if std::fs::write(&write_check, "").is_ok() {
            let _ = std::fs::remove_file(&write_check);
            set_mode(&logs, 0o755);
            return;
        }

        let result = FsLogDirectory::new(&logs)
            .delete_file(&name("keep.log"))
            .await;
        set_mode(&logs, 0o755);

        assert!(matches!(result, Err(LogFileError::DeleteError(_))));
        assert!(logs.join("keep.log").exists());
    }

    #[tokio::test]
    async fn test_delete_removes_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("old.log");
        std::fs::write(&path, "bye").unwrap();

        let dir = FsLogDirectory::new(temp_dir.path());
        dir.delete_file(&name("old.log")).await.unwrap();
        assert!(!path.exists());

        assert!(matches!(
            dir.delete_file(&name("old.log")).await,
            Err(LogFileError::NotFound)
        ));
        assert!(dir.list_entries().await.unwrap().is_empty());
    }
}
