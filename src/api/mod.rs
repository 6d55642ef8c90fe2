//! JSON-over-HTTP API.
//!
//! | Route                   | Handler                          |
//! |-------------------------|----------------------------------|
//! | `GET /health`           | [`handlers::health`]             |
//! | `GET /bookmarks?tag=`   | [`handlers::list_bookmarks`]     |
//! | `POST /bookmarks`       | [`handlers::create_bookmark`]    |
//! | `PUT /bookmarks/{id}`   | [`handlers::update_bookmark`]    |
//! | `DELETE /bookmarks/{id}`| [`handlers::delete_bookmark`]    |
//!
//! Other methods on these paths answer 405; unknown paths answer 404.

use actix_web::web;

pub mod error;
pub mod handlers;

pub use error::ApiError;
pub use handlers::SharedApp;

/// Registers every route plus the extractor configs and fallback handlers.
///
/// Expects a [`SharedApp`] to be registered as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(
            web::resource("/health")
                .route(web::get().to(handlers::health))
                .default_service(web::to(handlers::method_not_allowed)),
        )
        .service(
            web::resource("/bookmarks")
                .route(web::get().to(handlers::list_bookmarks))
                .route(web::post().to(handlers::create_bookmark))
                .default_service(web::to(handlers::method_not_allowed)),
        )
        .service(
            web::resource("/bookmarks/{id}")
                .route(web::put().to(handlers::update_bookmark))
                .route(web::delete().to(handlers::delete_bookmark))
                .default_service(web::to(handlers::method_not_allowed)),
        )
        .default_service(web::to(handlers::route_not_found));
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| ApiError::InvalidJson(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::InvalidQuery(err.to_string()).into())
}
