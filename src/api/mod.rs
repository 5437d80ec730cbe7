pub mod health;
pub mod remote_users;
pub mod swagger;
pub mod users;

use actix_web::web;

use crate::utils::AppError;

/// Registra as rotas da API (usado pelo `main` e pelos testes)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::InvalidRequest(format!("invalid request body: {}", err)).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::InvalidRequest(format!("invalid path parameter: {}", err)).into()
    }))
    // Health check
    .route("/health", web::get().to(health::health_check))
    // Local store
    .service(
        web::scope("/api/users")
            .route("", web::get().to(users::list_users))
            .route("", web::post().to(users::create_user))
            .route("/{id}", web::get().to(users::get_user))
            .route("/{id}", web::put().to(users::update_user))
            .route("/{id}", web::delete().to(users::delete_user)),
    )
    // Upstream proxy
    .service(
        web::scope("/api/remote/users")
            .route("", web::get().to(remote_users::list_remote_users))
            .route("", web::post().to(remote_users::create_remote_user))
            .route("/{id}", web::get().to(remote_users::get_remote_user))
            .route("/{id}", web::put().to(remote_users::update_remote_user))
            .route("/{id}", web::delete().to(remote_users::delete_remote_user)),
    );
}
