//! HTTP handlers and route configuration.

mod blogposts;
mod health;

use actix_web::web;

use crate::middleware::error::json_error_handler;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/blogposts")
                .route("", web::get().to(blogposts::list))
                .route("", web::post().to(blogposts::create))
                .route("/{id}", web::get().to(blogposts::get))
                .route("/{id}", web::put().to(blogposts::update))
                .route("/{id}", web::delete().to(blogposts::delete)),
        )
        .service(web::scope("/api").route("/health", web::get().to(health::health_check)));
}
