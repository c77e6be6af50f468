use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::shared::persistence::SoftDeletable;
use crate::user::application::domain::{UserChanges, UserPublic, UserValidationError};
use crate::user::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateUserError {
    #[error(transparent)]
    InvalidInput(#[from] UserValidationError),

    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for UpdateUserError {
    fn from(e: UserRepositoryError) -> Self {
        match e {
            UserRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
            UserRepositoryError::UserAlreadyExists => UpdateUserError::UserAlreadyExists,
            other => UpdateUserError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait IUpdateUserUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        changes: UserChanges,
    ) -> Result<UserPublic, UpdateUserError>;
}

#[derive(Debug, Clone)]
pub struct UpdateUserUseCase<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> UpdateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateUserUseCase for UpdateUserUseCase<R>
where
    R: UserRepository,
{
    async fn execute(
        &self,
        user_id: Uuid,
        changes: UserChanges,
    ) -> Result<UserPublic, UpdateUserError> {
        changes.validate()?;

        // Deleted accounts are invisible to updates.
        match self.repository.find_by_id(user_id).await? {
            Some(user) if !user.is_deleted() => {}
            _ => return Err(UpdateUserError::UserNotFound),
        }

        let password_changed = changes.password.is_some();
        let updated = self.repository.update_user(user_id, changes).await?;

        info!(user_id = %user_id, password_changed, "User updated");
        Ok(updated.to_public())
    }
}
