use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::shared::persistence::Audited;
use crate::user::application::domain::UserPublic;
use crate::user::application::ports::outgoing::{PasswordVerifier, UserRepository};

#[derive(Clone, Deserialize, ToSchema)]
pub struct LoginCredentials {
    #[schema(example = "jane@example.com")]
    pub email: String,

    #[schema(example = "S3cret!")]
    pub password: String,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthenticateUserError {
    /// Unknown e-mail, wrong password, inactive or deleted account.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IAuthenticateUserUseCase: Send + Sync {
    async fn execute(
        &self,
        credentials: LoginCredentials,
    ) -> Result<UserPublic, AuthenticateUserError>;
}

#[derive(Clone)]
pub struct AuthenticateUserUseCase<R>
where
    R: UserRepository,
{
    repository: R,
    verifier: Arc<dyn PasswordVerifier>,
}

impl<R> AuthenticateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repository: R, verifier: Arc<dyn PasswordVerifier>) -> Self {
        Self {
            repository,
            verifier,
        }
    }
}

#[async_trait]
impl<R> IAuthenticateUserUseCase for AuthenticateUserUseCase<R>
where
    R: UserRepository,
{
    async fn execute(
        &self,
        credentials: LoginCredentials,
    ) -> Result<UserPublic, AuthenticateUserError> {
        let user = self
            .repository
            .find_by_email(&credentials.email)
            .await
            .map_err(|e| AuthenticateUserError::RepositoryError(e.to_string()))?;

        // Verify even when the account is unknown so every rejection costs
        // the same.
        let stored = user.as_ref().map(|u| u.password_hash.clone());
        let matched = self
            .verifier
            .verify_password(credentials.password, stored)
            .await;

        let user = match user {
            Some(user) if matched && user.can_authenticate() => user,
            _ => {
                warn!(email = %credentials.email, "Rejected login attempt");
                return Err(AuthenticateUserError::InvalidCredentials);
            }
        };

        let logged_in = self
            .repository
            .record_login(user.id(), Utc::now().fixed_offset())
            .await
            .map_err(|e| AuthenticateUserError::RepositoryError(e.to_string()))?;

        info!(user_id = %logged_in.id(), "User logged in");
        Ok(logged_in.to_public())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::persistence::codec::PasswordCodec;
    use crate::shared::persistence::SoftDeletable;
    use crate::tests::support::fixtures::user_with_password;
    use crate::tests::support::mocks::MockUserRepo;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingVerifier {
        inner: PasswordCodec,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl PasswordVerifier for CountingVerifier {
        async fn verify_password(&self, plaintext: String, stored: Option<String>) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.verify_password(plaintext, stored).await
        }
    }

    fn counting_verifier() -> (Arc<dyn PasswordVerifier>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let verifier = CountingVerifier {
            inner: PasswordCodec::for_tests(),
            calls: Arc::clone(&calls),
        };
        (Arc::new(verifier), calls)
    }

    fn credentials(email: &str, password: &str) -> LoginCredentials {
        LoginCredentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_success_records_last_login() {
        let user = user_with_password("jane@example.com", "S3cret!");
        let id = user.id();
        let mut repository = MockUserRepo::new();
        repository
            .expect_find_by_email()
            .withf(|email| email.to_string() == "Jane@Example.com")
            .returning(move |_| Ok(Some(user.clone())));
        repository
            .expect_record_login()
            .withf(move |user_id, at| *user_id == id && at.offset().local_minus_utc() == 0)
            .times(1)
            .returning(|_, at| {
                let mut user = user_with_password("jane@example.com", "S3cret!");
                user.last_login = Some(at.with_timezone(&Utc));
                Ok(user)
            });

        let (verifier, calls) = counting_verifier();
        let public = AuthenticateUserUseCase::new(repository, verifier)
            .execute(credentials("Jane@Example.com", "S3cret!"))
            .await
            .unwrap();

        assert!(public.last_login.is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_wrong_password_is_generic_rejection() {
        let user = user_with_password("jane@example.com", "S3cret!");
        let mut repository = MockUserRepo::new();
        repository
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));
        repository.expect_record_login().times(0);

        let (verifier, _) = counting_verifier();
        let result = AuthenticateUserUseCase::new(repository, verifier)
            .execute(credentials("jane@example.com", "s3cret!"))
            .await;

        assert_eq!(result.unwrap_err(), AuthenticateUserError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_unknown_user_still_pays_for_verification() {
        let mut repository = MockUserRepo::new();
        repository.expect_find_by_email().returning(|_| Ok(None));
        repository.expect_record_login().times(0);

        let (verifier, calls) = counting_verifier();
        let result = AuthenticateUserUseCase::new(repository, verifier)
            .execute(credentials("nobody@example.com", "whatever"))
            .await;

        assert_eq!(result.unwrap_err(), AuthenticateUserError::InvalidCredentials);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_inactive_user_is_rejected_with_correct_password() {
        let mut user = user_with_password("jane@example.com", "S3cret!");
        user.is_active = false;
        let mut repository = MockUserRepo::new();
        repository
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));
        repository.expect_record_login().times(0);

        let (verifier, _) = counting_verifier();
        let result = AuthenticateUserUseCase::new(repository, verifier)
            .execute(credentials("jane@example.com", "S3cret!"))
            .await;

        assert_eq!(result.unwrap_err(), AuthenticateUserError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_deleted_user_is_rejected_with_correct_password() {
        let mut user = user_with_password("jane@example.com", "S3cret!");
        user.soft_delete();
        let mut repository = MockUserRepo::new();
        repository
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));
        repository.expect_record_login().times(0);

        let (verifier, _) = counting_verifier();
        let result = AuthenticateUserUseCase::new(repository, verifier)
            .execute(credentials("jane@example.com", "S3cret!"))
            .await;

        assert_eq!(result.unwrap_err(), AuthenticateUserError::InvalidCredentials);
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let rendered = format!("{:?}", credentials("jane@example.com", "S3cret!"));

        assert!(!rendered.contains("S3cret!"));
    }
}
