//! Error taxonomy of the HTTP layer and its mapping onto status codes.

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::types::bookmark::{ErrorBody, ErrorDetail, FieldError};
use crate::types::errors::StoreError;

pub const VALIDATION_FAILED: &str = "Validation failed";
pub const BOOKMARK_NOT_FOUND: &str = "Bookmark not found";
pub const ROUTE_NOT_FOUND: &str = "Route not found";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const INVALID_JSON: &str = "Invalid JSON body";
pub const INVALID_QUERY: &str = "Invalid query string";
pub const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug)]
pub enum ApiError {
    /// The payload failed field validation.
    Validation(Vec<FieldError>),
    /// No bookmark has the requested id.
    NotFound,
    /// No route matches the request path.
    RouteNotFound,
    /// The route exists but not for this method.
    MethodNotAllowed,
    /// The request body is not usable JSON.
    InvalidJson(String),
    /// The query string could not be parsed.
    InvalidQuery(String),
    /// Anything unexpected. The message is logged, never sent to the client.
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(errors) => {
                write!(f, "{} ({} field errors)", VALIDATION_FAILED, errors.len())
            }
            ApiError::NotFound => write!(f, "{}", BOOKMARK_NOT_FOUND),
            ApiError::RouteNotFound => write!(f, "{}", ROUTE_NOT_FOUND),
            ApiError::MethodNotAllowed => write!(f, "{}", METHOD_NOT_ALLOWED),
            ApiError::InvalidJson(msg) => write!(f, "{}: {}", INVALID_JSON, msg),
            ApiError::InvalidQuery(msg) => write!(f, "{}: {}", INVALID_QUERY, msg),
            ApiError::Internal(msg) => write!(f, "{}: {}", INTERNAL_ERROR, msg),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl ApiError {
    fn body(&self) -> ErrorBody {
        let (error, details) = match self {
            ApiError::Validation(errors) => (
                VALIDATION_FAILED,
                errors.iter().map(ErrorDetail::from).collect(),
            ),
            ApiError::NotFound => (BOOKMARK_NOT_FOUND, Vec::new()),
            ApiError::RouteNotFound => (ROUTE_NOT_FOUND, Vec::new()),
            ApiError::MethodNotAllowed => (METHOD_NOT_ALLOWED, Vec::new()),
            ApiError::InvalidJson(_) => (INVALID_JSON, Vec::new()),
            ApiError::InvalidQuery(_) => (INVALID_QUERY, Vec::new()),
            ApiError::Internal(_) => (INTERNAL_ERROR, Vec::new()),
        };
        ErrorBody {
            error: error.to_string(),
            details,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidJson(_) | ApiError::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(msg) = self {
            log::error!("Request failed: {}", msg);
        }
        HttpResponse::build(self.status_code()).json(self.body())
    }
}
