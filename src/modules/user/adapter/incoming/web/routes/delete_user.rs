use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::response::ErrorCode;
use crate::shared::api::ApiResponse;
use crate::user::application::use_cases::soft_delete_user::{
    SoftDeleteUserError, SoftDeleteUserOutput,
};
use crate::AppState;

fn map_soft_delete_user_error(err: SoftDeleteUserError, user_id: Uuid) -> HttpResponse {
    match err {
        SoftDeleteUserError::UserNotFound => {
            ApiResponse::not_found(ErrorCode::UserNotFound, "User not found")
        }
        SoftDeleteUserError::RepositoryError(e) => {
            error!(user_id = %user_id, error = %e, "Failed to soft delete user");
            ApiResponse::internal_error()
        }
    }
}

/// Soft delete a user
///
/// Repeating the request succeeds and returns the original deletion time with
/// `already_deleted = true`.
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = inline(SuccessResponse<SoftDeleteUserOutput>)),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/users/{user_id}")]
pub async fn soft_delete_user_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.soft_delete_user_use_case.execute(user_id).await {
        Ok(output) => ApiResponse::success(output),
        Err(e) => map_soft_delete_user_error(e, user_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::user::application::use_cases::soft_delete_user::ISoftDeleteUserUseCase;

    #[derive(Clone)]
    struct MockSoftDeleteUser {
        result: Result<(DateTime<Utc>, bool), SoftDeleteUserError>,
    }

    #[async_trait]
    impl ISoftDeleteUserUseCase for MockSoftDeleteUser {
        async fn execute(
            &self,
            user_id: Uuid,
        ) -> Result<SoftDeleteUserOutput, SoftDeleteUserError> {
            self.result
                .clone()
                .map(|(deleted_at, already_deleted)| SoftDeleteUserOutput {
                    user_id,
                    deleted_at,
                    already_deleted,
                })
        }
    }

    async fn delete_user(uc: MockSoftDeleteUser) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_soft_delete_user(uc)
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(soft_delete_user_handler)).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/users/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_soft_delete_returns_200() {
        let at = Utc::now();

        let (status, json) = delete_user(MockSoftDeleteUser {
            result: Ok((at, false)),
        })
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["already_deleted"], false);
        assert!(json["data"]["deleted_at"].is_string());
    }

    #[actix_web::test]
    async fn test_repeat_soft_delete_still_returns_200() {
        let (status, json) = delete_user(MockSoftDeleteUser {
            result: Ok((Utc::now(), true)),
        })
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["already_deleted"], true);
    }

    #[actix_web::test]
    async fn test_soft_delete_missing_user_returns_404() {
        let (status, json) = delete_user(MockSoftDeleteUser {
            result: Err(SoftDeleteUserError::UserNotFound),
        })
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "USER_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_soft_delete_repository_error_returns_500() {
        let (status, _) = delete_user(MockSoftDeleteUser {
            result: Err(SoftDeleteUserError::RepositoryError("down".into())),
        })
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
