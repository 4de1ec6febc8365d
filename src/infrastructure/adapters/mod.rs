//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod security;
pub mod storage;

pub use security::*;
pub use storage::*;
