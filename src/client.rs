//! HTTP client for the bookmark API.
//!
//! Wraps each route in one async method and turns every non-success response
//! into a [`ClientError::Api`] carrying the server's message and field details.
//! Payloads are tidied and validated with the server's own rules before they
//! are sent; a failing payload is a [`ClientError::Invalid`] and never leaves
//! the process.

use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::ClientConfig;
use crate::services::normalizer::prepare_submission;
use crate::services::validator::validate_bookmark;
use crate::types::bookmark::{Bookmark, BookmarkInput, DeleteResponse, ErrorBody, ErrorDetail, HealthResponse};
use crate::types::errors::ClientError;

const REQUEST_FAILED: &str = "Request failed";
const UNEXPECTED_ERROR: &str = "Unexpected error";

pub struct BookmarkClient {
    base_url: Url,
    http: reqwest::Client,
}

impl BookmarkClient {
    /// # Errors
    /// Returns [`ClientError::InvalidUrl`] if `api_url` is not an absolute URL.
    pub fn new(api_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(api_url).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", api_url, e)))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::new(&config.api_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins path segments onto the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<B, T>(&self, method: Method, url: Url, body: Option<&B>) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));

        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ClientError::Transport(e.to_string()));
        }

        let body = if is_json {
            response.json::<ErrorBody>().await.ok()
        } else {
            None
        };
        let (message, details) = match body {
            Some(body) => (body.error, body.details),
            None => (REQUEST_FAILED.to_string(), Vec::new()),
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
            details,
        })
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = self.endpoint(&["health"])?;
        self.send::<(), _>(Method::GET, url, None).await
    }

    /// Lists bookmarks, optionally restricted to one tag.
    pub async fn fetch_bookmarks(&self, tag: Option<&str>) -> Result<Vec<Bookmark>, ClientError> {
        let mut url = self.endpoint(&["bookmarks"])?;
        if let Some(tag) = tag.filter(|t| !t.is_empty()) {
            url.query_pairs_mut().append_pair("tag", tag);
        }
        self.send::<(), _>(Method::GET, url, None).await
    }

    /// # Errors
    /// Returns [`ClientError::Invalid`] without sending anything when the
    /// tidied payload fails validation.
    pub async fn create_bookmark(&self, input: &BookmarkInput) -> Result<Bookmark, ClientError> {
        let body = checked(input)?;
        let url = self.endpoint(&["bookmarks"])?;
        self.send(Method::POST, url, Some(&body)).await
    }

    /// Replaces every editable field. Validated locally like a create.
    pub async fn update_bookmark(&self, id: &str, input: &BookmarkInput) -> Result<Bookmark, ClientError> {
        let body = checked(input)?;
        let url = self.endpoint(&["bookmarks", id])?;
        self.send(Method::PUT, url, Some(&body)).await
    }

    pub async fn delete_bookmark(&self, id: &str) -> Result<DeleteResponse, ClientError> {
        let url = self.endpoint(&["bookmarks", id])?;
        self.send::<(), _>(Method::DELETE, url, None).await
    }
}

fn checked(input: &BookmarkInput) -> Result<BookmarkInput, ClientError> {
    let prepared = prepare_submission(input);
    let errors = validate_bookmark(&prepared);
    if errors.is_empty() {
        Ok(prepared)
    } else {
        Err(ClientError::Invalid(errors.iter().map(ErrorDetail::from).collect()))
    }
}

/// Collapses an error into one line for display.
///
/// Validation details are joined with `" | "`; otherwise the error's own
/// message is used.
pub fn format_api_error(error: Option<&ClientError>) -> String {
    let Some(error) = error else {
        return UNEXPECTED_ERROR.to_string();
    };

    let details = error.details();
    if !details.is_empty() {
        return details
            .iter()
            .map(|d| d.message.as_str())
            .collect::<Vec<_>>()
            .join(" | ");
    }

    match error {
        ClientError::Api { message, .. } if message.is_empty() => REQUEST_FAILED.to_string(),
        other => other.to_string(),
    }
}
