pub mod create_user;
pub mod delete_user;
pub mod fetch_user;
pub mod login_user;
pub mod update_user;

pub use create_user::{create_user_handler, CreateUserRequest};
pub use delete_user::soft_delete_user_handler;
pub use fetch_user::fetch_user_handler;
pub use login_user::login_user_handler;
pub use update_user::{update_user_handler, UpdateUserRequest};

use actix_web::HttpResponse;

use crate::shared::api::response::ErrorCode;
use crate::shared::api::ApiResponse;
use crate::user::application::domain::UserValidationError;

pub(crate) fn validation_error_response(err: &UserValidationError) -> HttpResponse {
    let code = match err {
        UserValidationError::InvalidEmail(_) => ErrorCode::InvalidEmail,
        UserValidationError::InvalidUsername(_) => ErrorCode::InvalidUsername,
        UserValidationError::InvalidPassword(_) => ErrorCode::InvalidPassword,
        UserValidationError::InvalidFullName(_) => ErrorCode::InvalidFullName,
    };
    ApiResponse::bad_request(code, &err.to_string())
}

pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(create_user_handler)
        .service(fetch_user_handler)
        .service(update_user_handler)
        .service(soft_delete_user_handler)
        .service(login_user_handler);
}
