use async_trait::async_trait;
use uuid::Uuid;

use crate::user::application::domain::{NewUser, UserChanges, UserPublic};
use crate::user::application::use_cases::{
    authenticate_user::{AuthenticateUserError, IAuthenticateUserUseCase, LoginCredentials},
    create_user::{CreateUserError, ICreateUserUseCase},
    fetch_user::{FetchUserError, IFetchUserUseCase},
    soft_delete_user::{ISoftDeleteUserUseCase, SoftDeleteUserError, SoftDeleteUserOutput},
    update_user::{IUpdateUserUseCase, UpdateUserError},
};

const NOT_USED: &str = "not used in this test";

#[derive(Default, Clone)]
pub struct StubCreateUserUseCase;

#[async_trait]
impl ICreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _user: NewUser) -> Result<UserPublic, CreateUserError> {
        Err(CreateUserError::RepositoryError(NOT_USED.to_string()))
    }
}

#[derive(Default, Clone)]
pub struct StubFetchUserUseCase;

#[async_trait]
impl IFetchUserUseCase for StubFetchUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<UserPublic, FetchUserError> {
        Err(FetchUserError::UserNotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateUserUseCase;

#[async_trait]
impl IUpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _changes: UserChanges,
    ) -> Result<UserPublic, UpdateUserError> {
        Err(UpdateUserError::RepositoryError(NOT_USED.to_string()))
    }
}

#[derive(Default, Clone)]
pub struct StubSoftDeleteUserUseCase;

#[async_trait]
impl ISoftDeleteUserUseCase for StubSoftDeleteUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<SoftDeleteUserOutput, SoftDeleteUserError> {
        Err(SoftDeleteUserError::RepositoryError(NOT_USED.to_string()))
    }
}

#[derive(Default, Clone)]
pub struct StubAuthenticateUserUseCase;

#[async_trait]
impl IAuthenticateUserUseCase for StubAuthenticateUserUseCase {
    async fn execute(
        &self,
        _credentials: LoginCredentials,
    ) -> Result<UserPublic, AuthenticateUserError> {
        Err(AuthenticateUserError::InvalidCredentials)
    }
}
