//! User Command Handlers

use std::sync::Arc;

use crate::application::commands::BootstrapDefaultUser;
use crate::application::error::ApplicationError;
use crate::application::ports::{PasswordHasherPort, UserRepositoryPort};

/// 初始化结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// 新建了默认账户
    Created { id: i64 },
    /// 账户已存在，未做修改
    AlreadyExists { id: i64 },
}

/// BootstrapDefaultUser Handler
pub struct BootstrapUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    hasher: Arc<dyn PasswordHasherPort>,
}

impl BootstrapUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>, hasher: Arc<dyn PasswordHasherPort>) -> Self {
        Self { user_repo, hasher }
    }

    pub async fn handle(
        &self,
        command: BootstrapDefaultUser,
    ) -> Result<BootstrapOutcome, ApplicationError> {
        if command.username.trim().is_empty() {
            return Err(ApplicationError::validation("Username cannot be empty"));
        }
        if command.password.is_empty() {
            return Err(ApplicationError::validation("Password cannot be empty"));
        }

        self.user_repo.ensure_schema().await?;

        if let Some(existing) = self.user_repo.find_by_username(&command.username).await? {
            tracing::info!(
                user_id = existing.id,
                username = %existing.username,
                "Default user already exists"
            );
            return Ok(BootstrapOutcome::AlreadyExists { id: existing.id });
        }

        let password_hash = self.hasher.hash(&command.password)?;
        let id = self
            .user_repo
            .insert(&command.username, &password_hash)
            .await?;

        tracing::info!(user_id = id, username = %command.username, "Default user created");

        Ok(BootstrapOutcome::Created { id })
    }
}
