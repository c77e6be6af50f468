pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::user;

use crate::config::Settings;
use crate::shared::api::custom_json_config;
use crate::shared::persistence::codec::PasswordCodec;
use crate::user::adapter::outgoing::{UserCodecs, UserRepositoryPostgres};
use crate::user::application::ports::outgoing::PasswordVerifier;
use crate::user::application::use_cases::{
    authenticate_user::{AuthenticateUserUseCase, IAuthenticateUserUseCase},
    create_user::{CreateUserUseCase, ICreateUserUseCase},
    fetch_user::{FetchUserUseCase, IFetchUserUseCase},
    soft_delete_user::{ISoftDeleteUserUseCase, SoftDeleteUserUseCase},
    update_user::{IUpdateUserUseCase, UpdateUserUseCase},
};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config as RedisConfig, Runtime};

use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    pub fetch_user_use_case: Arc<dyn IFetchUserUseCase + Send + Sync>,
    pub update_user_use_case: Arc<dyn IUpdateUserUseCase + Send + Sync>,
    pub soft_delete_user_use_case: Arc<dyn ISoftDeleteUserUseCase + Send + Sync>,
    pub authenticate_user_use_case: Arc<dyn IAuthenticateUserUseCase + Send + Sync>,
}

#[cfg(not(tarpaulin_include))]
fn init_tracing(debug: bool) {
    let default_filter = if debug {
        "debug,actix_web=debug"
    } else {
        "info,actix_web=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    let settings = Settings::load().context("invalid configuration")?;
    init_tracing(settings.debug);

    info!(app = %settings.app_name, root_path = %settings.root_path, "Starting application...");

    // Database connection
    let mut opt = ConnectOptions::new(settings.database_url.clone());
    opt.max_connections(settings.database_pool.max_connections)
        .min_connections(settings.database_pool.min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(settings.debug);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;
    let db_arc = Arc::new(conn);

    // Redis is optional; only the readiness probe uses it
    let redis_pool = match &settings.redis_url {
        Some(url) => {
            let pool = RedisConfig::from_url(url)
                .create_pool(Some(Runtime::Tokio1))
                .context("failed to create Redis pool")?;
            Some(Arc::new(pool))
        }
        None => None,
    };

    let hash = &settings.password_hash;
    let password_codec =
        PasswordCodec::with_params(hash.memory_kib, hash.iterations, hash.parallelism)
            .context("invalid Argon2 parameters")?;
    let password_verifier: Arc<dyn PasswordVerifier> = Arc::new(password_codec.clone());

    let user_repo = UserRepositoryPostgres::new(
        Arc::clone(&db_arc),
        UserCodecs::new(password_codec),
    );

    let state = AppState {
        app_name: settings.app_name.clone(),
        create_user_use_case: Arc::new(CreateUserUseCase::new(user_repo.clone())),
        fetch_user_use_case: Arc::new(FetchUserUseCase::new(user_repo.clone())),
        update_user_use_case: Arc::new(UpdateUserUseCase::new(user_repo.clone())),
        soft_delete_user_use_case: Arc::new(SoftDeleteUserUseCase::new(user_repo.clone())),
        authenticate_user_use_case: Arc::new(AuthenticateUserUseCase::new(
            user_repo,
            password_verifier,
        )),
    };

    let server_url = settings.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(redis_pool.clone()))
            .app_data(custom_json_config())
            .service(crate::health::health)
            .service(crate::health::readiness)
            .configure(|cfg| api::openapi::configure_docs(cfg, &settings))
            .service(web::scope(&settings.root_path).configure(init_routes))
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(crate::api::welcome::welcome);
    crate::user::adapter::incoming::web::routes::configure(cfg);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
