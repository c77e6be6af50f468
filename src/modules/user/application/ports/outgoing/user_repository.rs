use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use uuid::Uuid;

use crate::shared::persistence::codec::CodecError;
use crate::shared::persistence::{EntityError, SoftDeleteOutcome};
use crate::user::application::domain::{NewUser, User, UserChanges};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Corrupt user record: {0}")]
    CorruptRecord(#[from] EntityError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Storage port for users. Implementations apply the column codecs, so
/// callers pass plaintext passwords and mixed-case e-mails.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    /// Returns soft-deleted users too; filtering is up to the caller.
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;

    async fn update_user(
        &self,
        user_id: Uuid,
        changes: UserChanges,
    ) -> Result<User, UserRepositoryError>;

    /// Persists the live → deleted transition only if the row is still live.
    /// A row deleted in the meantime yields `AlreadyDeleted` with the stored
    /// timestamp.
    async fn mark_deleted(
        &self,
        user_id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<SoftDeleteOutcome, UserRepositoryError>;

    async fn record_login(
        &self,
        user_id: Uuid,
        at: DateTime<FixedOffset>,
    ) -> Result<User, UserRepositoryError>;
}
