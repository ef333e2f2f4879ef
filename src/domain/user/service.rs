use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::error::UserServiceError;
use super::password::hash_password;
use super::{RegisterUserCommand, User};
use crate::infrastructure::repositories::UserRepository;

pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
pub trait UserServiceApi: Send + Sync {
    /// Validate and store a new user. `auditor` is recorded as its creator.
    async fn register(
        &self,
        command: RegisterUserCommand,
        auditor: &str,
    ) -> Result<User, UserServiceError>;

    async fn find_user(&self, user_id: Uuid) -> Result<User, UserServiceError>;
}

#[async_trait]
impl UserServiceApi for UserService {
    async fn register(
        &self,
        command: RegisterUserCommand,
        auditor: &str,
    ) -> Result<User, UserServiceError> {
        let violations = command.violations();
        if !violations.is_empty() {
            return Err(UserServiceError::Invalid(violations));
        }

        if self.user_repo.find_by_id(command.id).await?.is_some() {
            return Err(UserServiceError::AlreadyExists(command.id));
        }

        // argon2 is CPU bound
        let password = command.password.clone();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| UserServiceError::Hashing(e.to_string()))?
            .map_err(UserServiceError::Hashing)?;

        let user = User::register(command, password_hash, auditor);
        let created = self.user_repo.insert(&user).await?;

        tracing::info!(user_id = %created.id, created_by = %created.audit.created_by, "User registered");

        Ok(created)
    }

    async fn find_user(&self, user_id: Uuid) -> Result<User, UserServiceError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(UserServiceError::NotFound(user_id))
    }
}
