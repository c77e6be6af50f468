use actix_web::web;
use utoipa::openapi::server::Server;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::schemas::{ErrorDetail, ErrorResponse, WelcomeResponse};
use crate::config::Settings;
use crate::user::adapter::incoming::web::routes::{CreateUserRequest, UpdateUserRequest};
use crate::user::application::domain::UserPublic;
use crate::user::application::use_cases::authenticate_user::LoginCredentials;
use crate::user::application::use_cases::soft_delete_user::SoftDeleteUserOutput;

#[derive(OpenApi)]
#[openapi(
    info(description = "User management API"),
    paths(
        crate::api::welcome::welcome,
        crate::user::adapter::incoming::web::routes::create_user::create_user_handler,
        crate::user::adapter::incoming::web::routes::fetch_user::fetch_user_handler,
        crate::user::adapter::incoming::web::routes::update_user::update_user_handler,
        crate::user::adapter::incoming::web::routes::delete_user::soft_delete_user_handler,
        crate::user::adapter::incoming::web::routes::login_user::login_user_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            WelcomeResponse,
            CreateUserRequest,
            UpdateUserRequest,
            LoginCredentials,
            UserPublic,
            SoftDeleteUserOutput,
        )
    ),
    tags(
        (name = "meta", description = "Service information"),
        (name = "users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;

/// The document served at `{root}/openapi.json`. Paths are relative to the
/// single server entry, which is the configured root path.
pub fn api_doc(settings: &Settings) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = settings.app_name.clone();
    doc.info.version = settings.api_version.clone();

    let root = if settings.root_path.is_empty() {
        "/"
    } else {
        settings.root_path.as_str()
    };
    doc.servers = Some(vec![Server::new(root)]);

    doc
}

/// Mounts the document with Swagger UI at `{root}/docs/` and ReDoc at
/// `{root}/redoc`.
pub fn configure_docs(cfg: &mut web::ServiceConfig, settings: &Settings) {
    let doc = api_doc(settings);

    cfg.service(
        SwaggerUi::new(settings.route("/docs/{_:.*}"))
            .url(settings.route("/openapi.json"), doc.clone()),
    )
    .service(Redoc::with_url(settings.route("/redoc"), doc));
}
