//! Request handlers mapping the bookmark routes onto store operations.

use std::sync::{Mutex, MutexGuard};

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use super::error::ApiError;
use crate::app::App;
use crate::managers::bookmark_manager::BookmarkManagerTrait;
use crate::services::validator::validate_bookmark;
use crate::types::bookmark::{BookmarkInput, DeleteResponse, HealthResponse};

pub type SharedApp = web::Data<Mutex<App>>;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub tag: Option<String>,
}

fn lock(app: &SharedApp) -> Result<MutexGuard<'_, App>, ApiError> {
    app.lock()
        .map_err(|e| ApiError::Internal(format!("app state lock poisoned: {}", e)))
}

fn check(input: &BookmarkInput) -> Result<(), ApiError> {
    let errors = validate_bookmark(input);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors))
    }
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// `GET /bookmarks[?tag=x]`
pub async fn list_bookmarks(
    app: SharedApp,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError> {
    let tag = query.tag.as_deref().map(str::to_lowercase);
    let a = lock(&app)?;
    let bookmarks = a.bookmark_manager.list(tag.as_deref());
    Ok(HttpResponse::Ok().json(bookmarks))
}

/// `POST /bookmarks`
pub async fn create_bookmark(
    app: SharedApp,
    body: web::Json<BookmarkInput>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    check(&input)?;
    let mut a = lock(&app)?;
    let bookmark = a.bookmark_manager.create(&input)?;
    Ok(HttpResponse::Created().json(bookmark))
}

/// `PUT /bookmarks/{id}`: full replace, validated like a create.
pub async fn update_bookmark(
    app: SharedApp,
    path: web::Path<String>,
    body: web::Json<BookmarkInput>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let input = body.into_inner();
    check(&input)?;
    let mut a = lock(&app)?;
    match a.bookmark_manager.update(&id, &input)? {
        Some(updated) => Ok(HttpResponse::Ok().json(updated)),
        None => Err(ApiError::NotFound),
    }
}

/// `DELETE /bookmarks/{id}`
pub async fn delete_bookmark(app: SharedApp, path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let mut a = lock(&app)?;
    match a.bookmark_manager.delete(&id)? {
        Some(bookmark) => Ok(HttpResponse::Ok().json(DeleteResponse {
            message: "Bookmark deleted".to_string(),
            bookmark,
        })),
        None => Err(ApiError::NotFound),
    }
}

pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    log::debug!("{} not allowed on {}", req.method(), req.path());
    Err(ApiError::MethodNotAllowed)
}

pub async fn route_not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    log::debug!("No route for {} {}", req.method(), req.path());
    Err(ApiError::RouteNotFound)
}
