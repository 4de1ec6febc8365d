//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod log_handlers;
mod user_handlers;

pub use log_handlers::*;
pub use user_handlers::*;
