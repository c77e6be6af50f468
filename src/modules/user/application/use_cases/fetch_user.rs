use async_trait::async_trait;
use uuid::Uuid;

use crate::shared::persistence::SoftDeletable;
use crate::user::application::domain::UserPublic;
use crate::user::application::ports::outgoing::UserRepository;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IFetchUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<UserPublic, FetchUserError>;
}

#[derive(Debug, Clone)]
pub struct FetchUserUseCase<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> FetchUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IFetchUserUseCase for FetchUserUseCase<R>
where
    R: UserRepository,
{
    async fn execute(&self, user_id: Uuid) -> Result<UserPublic, FetchUserError> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchUserError::RepositoryError(e.to_string()))?;

        match user {
            Some(user) if !user.is_deleted() => Ok(user.to_public()),
            _ => Err(FetchUserError::UserNotFound),
        }
    }
}
