use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::response::ErrorCode;
use crate::shared::api::ApiResponse;
use crate::user::application::domain::UserPublic;
use crate::user::application::use_cases::fetch_user::FetchUserError;
use crate::AppState;

fn map_fetch_user_error(err: FetchUserError, user_id: Uuid) -> HttpResponse {
    match err {
        FetchUserError::UserNotFound => {
            ApiResponse::not_found(ErrorCode::UserNotFound, "User not found")
        }
        FetchUserError::RepositoryError(e) => {
            error!(user_id = %user_id, error = %e, "Failed to fetch user");
            ApiResponse::internal_error()
        }
    }
}

/// Get a user by id
///
/// Soft-deleted users are reported as not found.
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = inline(SuccessResponse<UserPublic>)),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/users/{user_id}")]
pub async fn fetch_user_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.fetch_user_use_case.execute(user_id).await {
        Ok(user) => ApiResponse::success(user),
        Err(e) => map_fetch_user_error(e, user_id),
    }
}
