use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::response::ErrorCode;
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::routes::validation_error_response;
use crate::user::application::domain::{NewUser, UserPublic};
use crate::user::application::use_cases::create_user::CreateUserError;
use crate::AppState;

/// Request body for creating a user
#[derive(Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Optional caller-assigned id; generated when absent
    pub id: Option<Uuid>,

    /// Stored lower-cased
    #[schema(example = "Jane@Example.com")]
    pub email: String,

    #[schema(example = "jane")]
    pub username: String,

    #[schema(example = "S3cret!")]
    pub password: String,

    #[schema(example = "Jane Doe")]
    pub full_name: Option<String>,

    pub is_active: Option<bool>,

    pub is_superuser: Option<bool>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        let mut user = NewUser::new(req.email, req.username, req.password)
            .with_full_name(req.full_name);
        if let Some(id) = req.id {
            user = user.with_id(id);
        }
        if let Some(is_active) = req.is_active {
            user.is_active = is_active;
        }
        if let Some(is_superuser) = req.is_superuser {
            user.is_superuser = is_superuser;
        }
        user
    }
}

fn map_create_user_error(err: CreateUserError, email: &str) -> HttpResponse {
    match err {
        CreateUserError::InvalidInput(e) => {
            warn!(email = %email, error = %e, "Invalid user input");
            validation_error_response(&e)
        }

        CreateUserError::UserAlreadyExists => {
            warn!(email = %email, "User already exists");
            ApiResponse::conflict(ErrorCode::UserAlreadyExists, "User already exists")
        }

        CreateUserError::RepositoryError(e) => {
            error!(email = %email, error = %e, "Failed to create user");
            ApiResponse::internal_error()
        }
    }
}

/// Create a user
///
/// The password is hashed before it is stored and is never returned.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = inline(SuccessResponse<UserPublic>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Email or username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/users")]
pub async fn create_user_handler(
    req: web::Json<CreateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let email = req.email.clone();

    info!(email = %email, username = %req.username, "User creation attempt");

    match data.create_user_use_case.execute(req.into()).await {
        Ok(user) => ApiResponse::created(user),
        Err(e) => map_create_user_error(e, &email),
    }
}
