//! User Commands

/// 初始化默认账户命令
///
/// 建表并在账户不存在时写入一条带哈希密码的记录
#[derive(Debug, Clone)]
pub struct BootstrapDefaultUser {
    pub username: String,
    pub password: String,
}
