use actix_web::{get, web, HttpResponse, Responder};

use crate::api::schemas::WelcomeResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses((status = 200, description = "Greeting", body = WelcomeResponse))
)]
#[get("/")]
pub async fn welcome(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(WelcomeResponse {
        message: format!("Welcome to {}!", data.app_name),
    })
}
