//! Storage Adapters - 文件系统适配器

mod log_directory;

pub use log_directory::FsLogDirectory;
