use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::response::ErrorCode;
use crate::shared::api::ApiResponse;
use crate::user::application::domain::UserPublic;
use crate::user::application::use_cases::authenticate_user::{
    AuthenticateUserError, LoginCredentials,
};
use crate::AppState;

/// Check credentials
///
/// Records `last_login` on success. Every failure, whatever the cause, is the
/// same `INVALID_CREDENTIALS` response.
#[utoipa::path(
    post,
    path = "/login",
    tag = "users",
    request_body = LoginCredentials,
    responses(
        (status = 200, description = "Credentials accepted", body = inline(SuccessResponse<UserPublic>)),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/login")]
pub async fn login_user_handler(
    req: web::Json<LoginCredentials>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .authenticate_user_use_case
        .execute(req.into_inner())
        .await
    {
        Ok(user) => ApiResponse::success(user),
        Err(AuthenticateUserError::InvalidCredentials) => ApiResponse::unauthorized(
            ErrorCode::InvalidCredentials,
            "Invalid email or password",
        ),
        Err(AuthenticateUserError::RepositoryError(e)) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
