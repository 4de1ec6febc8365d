//! init-db - 初始化账户数据库
//!
//! 建立 users 表，并在默认账户不存在时写入 bcrypt 哈希后的密码。
//! 可重复执行。

use std::sync::Arc;

use logdeck::application::{BootstrapDefaultUser, BootstrapOutcome, BootstrapUserHandler};
use logdeck::config::load_config;
use logdeck::infrastructure::persistence::sqlite::{create_pool, DatabaseConfig};
use logdeck::infrastructure::{BcryptPasswordHasher, SqliteUserRepository};
use logdeck::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    // 确保数据库所在目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let pool = create_pool(&DatabaseConfig::from(&config.database)).await?;

    let handler = BootstrapUserHandler::new(
        Arc::new(SqliteUserRepository::new(pool.clone())),
        Arc::new(BcryptPasswordHasher::new(config.bootstrap.bcrypt_cost)),
    );

    let outcome = handler
        .handle(BootstrapDefaultUser {
            username: config.bootstrap.username.clone(),
            password: config.bootstrap.password.clone(),
        })
        .await?;

    let created = matches!(outcome, BootstrapOutcome::Created { .. });

    pool.close().await;
    tracing::info!(
        path = %config.database.path,
        created,
        "Database initialized successfully"
    );

    Ok(())
}
