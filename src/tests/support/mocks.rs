use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::shared::persistence::SoftDeleteOutcome;
use crate::user::application::domain::{NewUser, User, UserChanges};
use crate::user::application::ports::outgoing::{UserRepository, UserRepositoryError};

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;

        async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError>;

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;

        async fn update_user(
            &self,
            user_id: Uuid,
            changes: UserChanges,
        ) -> Result<User, UserRepositoryError>;

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
}
