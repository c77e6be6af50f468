use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::persistence::{SoftDeletable, SoftDeleteOutcome};
use crate::user::application::ports::outgoing::{UserRepository, UserRepositoryError};

/// Result of a delete request. Repeating the request is not an error: the
/// original timestamp comes back with `already_deleted = true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SoftDeleteUserOutput {
    pub user_id: Uuid,
    pub deleted_at: DateTime<Utc>,
    pub already_deleted: bool,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SoftDeleteUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for SoftDeleteUserError {
    fn from(e: UserRepositoryError) -> Self {
        match e {
            UserRepositoryError::UserNotFound => SoftDeleteUserError::UserNotFound,
            other => SoftDeleteUserError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait ISoftDeleteUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<SoftDeleteUserOutput, SoftDeleteUserError>;
}

#[derive(Debug, Clone)]
pub struct SoftDeleteUserUseCase<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> SoftDeleteUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ISoftDeleteUserUseCase for SoftDeleteUserUseCase<R>
where
    R: UserRepository,
{
    async fn execute(&self, user_id: Uuid) -> Result<SoftDeleteUserOutput, SoftDeleteUserError> {
        let mut user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or(SoftDeleteUserError::UserNotFound)?;

        let outcome = match user.soft_delete() {
            SoftDeleteOutcome::Deleted(at) => self.repository.mark_deleted(user_id, at).await?,
            repeat @ SoftDeleteOutcome::AlreadyDeleted(_) => repeat,
        };

        info!(
            user_id = %user_id,
            already_deleted = outcome.is_repeat(),
            "User soft deleted"
        );

        Ok(SoftDeleteUserOutput {
            user_id,
            deleted_at: outcome.deleted_at(),
            already_deleted: outcome.is_repeat(),
        })
    }
}
