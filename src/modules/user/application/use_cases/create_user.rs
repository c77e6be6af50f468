use async_trait::async_trait;
use tracing::{info, warn};

use crate::shared::persistence::Audited;
use crate::user::application::domain::{NewUser, UserPublic, UserValidationError};
use crate::user::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateUserError {
    #[error(transparent)]
    InvalidInput(#[from] UserValidationError),

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, user: NewUser) -> Result<UserPublic, CreateUserError>;
}

#[derive(Debug, Clone)]
pub struct CreateUserUseCase<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> CreateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreateUserUseCase for CreateUserUseCase<R>
where
    R: UserRepository,
{
    async fn execute(&self, user: NewUser) -> Result<UserPublic, CreateUserError> {
        user.validate()?;

        // Uniqueness is enforced by the database constraints.
        let created = self
            .repository
            .create_user(user)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => CreateUserError::UserAlreadyExists,
                other => CreateUserError::RepositoryError(other.to_string()),
            })?;

        if created.is_superuser {
            warn!(user_id = %created.id(), "Superuser account created");
        }
        info!(user_id = %created.id(), "User created");

        Ok(created.to_public())
    }
}
