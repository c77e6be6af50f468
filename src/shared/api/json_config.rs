// src/shared/api/json_config.rs
use crate::shared::api::response::ErrorCode;
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;
use tracing::warn;

/// Malformed or ill-typed JSON bodies (including timestamps without an
/// offset) become a `400 VALIDATION_ERROR` envelope.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, req| {
        let message = err.to_string();
        warn!(path = %req.path(), error = %message, "Rejected request body");
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request(ErrorCode::ValidationError, &message),
        )
        .into()
    })
}
