//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod log_handlers;

pub use log_handlers::*;
