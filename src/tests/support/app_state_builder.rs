use std::sync::Arc;

use actix_web::web;

use crate::tests::support::stubs::*;
use crate::user::application::use_cases::{
    authenticate_user::IAuthenticateUserUseCase, create_user::ICreateUserUseCase,
    fetch_user::IFetchUserUseCase, soft_delete_user::ISoftDeleteUserUseCase,
    update_user::IUpdateUserUseCase,
};
use crate::AppState;

/// Builds an `AppState` whose use cases are stubs unless replaced.
pub struct TestAppStateBuilder {
    app_name: String,
    create_user: Arc<dyn ICreateUserUseCase + Send + Sync>,
    fetch_user: Arc<dyn IFetchUserUseCase + Send + Sync>,
    update_user: Arc<dyn IUpdateUserUseCase + Send + Sync>,
    soft_delete_user: Arc<dyn ISoftDeleteUserUseCase + Send + Sync>,
    authenticate_user: Arc<dyn IAuthenticateUserUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            app_name: "Test API".to_string(),
            create_user: Arc::new(StubCreateUserUseCase),
            fetch_user: Arc::new(StubFetchUserUseCase),
            update_user: Arc::new(StubUpdateUserUseCase),
            soft_delete_user: Arc::new(StubSoftDeleteUserUseCase),
            authenticate_user: Arc::new(StubAuthenticateUserUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_app_name(mut self, app_name: &str) -> Self {
        self.app_name = app_name.to_string();
        self
    }

    pub fn with_create_user(mut self, uc: impl ICreateUserUseCase + Send + Sync + 'static) -> Self {
        self.create_user = Arc::new(uc);
        self
    }

    pub fn with_fetch_user(mut self, uc: impl IFetchUserUseCase + Send + Sync + 'static) -> Self {
        self.fetch_user = Arc::new(uc);
        self
    }

    pub fn with_update_user(mut self, uc: impl IUpdateUserUseCase + Send + Sync + 'static) -> Self {
        self.update_user = Arc::new(uc);
        self
    }

    pub fn with_soft_delete_user(
        mut self,
        uc: impl ISoftDeleteUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.soft_delete_user = Arc::new(uc);
        self
    }

    pub fn with_authenticate_user(
        mut self,
        uc: impl IAuthenticateUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.authenticate_user = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            app_name: self.app_name,
            create_user_use_case: self.create_user,
            fetch_user_use_case: self.fetch_user,
            update_user_use_case: self.update_user,
            soft_delete_user_use_case: self.soft_delete_user,
            authenticate_user_use_case: self.authenticate_user,
        })
    }
}
