//! HTTP Handlers

mod logs;

pub use logs::*;
