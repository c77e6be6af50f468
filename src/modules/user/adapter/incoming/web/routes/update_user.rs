use actix_web::{patch, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::response::ErrorCode;
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::routes::validation_error_response;
use crate::user::application::domain::{UserChanges, UserPublic};
use crate::user::application::use_cases::update_user::UpdateUserError;
use crate::AppState;

/// Partial update; omitted fields keep their stored values
#[derive(Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[schema(example = "jane.doe@example.com")]
    pub email: Option<String>,

    pub username: Option<String>,

    /// Re-hashed before it is stored
    pub password: Option<String>,

    pub full_name: Option<String>,

    pub is_active: Option<bool>,

    pub is_superuser: Option<bool>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(req: UpdateUserRequest) -> Self {
        UserChanges {
            email: req.email,
            username: req.username,
            password: req.password,
            full_name: req.full_name,
            is_active: req.is_active,
            is_superuser: req.is_superuser,
        }
    }
}

fn map_update_user_error(err: UpdateUserError, user_id: Uuid) -> HttpResponse {
    match err {
        UpdateUserError::InvalidInput(e) => {
            warn!(user_id = %user_id, error = %e, "Invalid user update");
            validation_error_response(&e)
        }
        UpdateUserError::UserNotFound => {
            ApiResponse::not_found(ErrorCode::UserNotFound, "User not found")
        }
        UpdateUserError::UserAlreadyExists => {
            warn!(user_id = %user_id, "Update collides with an existing user");
            ApiResponse::conflict(ErrorCode::UserAlreadyExists, "User already exists")
        }
        UpdateUserError::RepositoryError(e) => {
            error!(user_id = %user_id, error = %e, "Failed to update user");
            ApiResponse::internal_error()
        }
    }
}

/// Update a user
#[utoipa::path(
    patch,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = Uuid, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = inline(SuccessResponse<UserPublic>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Email or username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/users/{user_id}")]
pub async fn update_user_handler(
    path: web::Path<Uuid>,
    req: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data
        .update_user_use_case
        .execute(user_id, req.into_inner().into())
        .await
    {
        Ok(user) => ApiResponse::success(user),
        Err(e) => map_update_user_error(e, user_id),
    }
}
