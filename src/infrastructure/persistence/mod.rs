//! Persistence Layer - 数据持久化
//!
//! SQLite 存储实现（账户表）

pub mod sqlite;
