use std::fmt;

use super::bookmark::ErrorDetail;

// === StoreError ===

/// Errors raised while loading or persisting the bookmark collection.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    Io(String),
    /// The stored document could not be parsed or encoded.
    Serialization(String),
    /// Database operation failed.
    Database(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "Bookmark storage I/O error: {}", msg),
            StoreError::Serialization(msg) => {
                write!(f, "Bookmark storage serialization error: {}", msg)
            }
            StoreError::Database(msg) => write!(f, "Bookmark database error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

// === ConfigError ===

/// Errors related to reading configuration from the environment.
#[derive(Debug)]
pub enum ConfigError {
    /// The named variable holds a value that cannot be used.
    InvalidValue { key: String, value: String },
    /// The requested storage backend is unknown or not compiled in.
    UnsupportedStorage(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {}: {}", key, value)
            }
            ConfigError::UnsupportedStorage(name) => {
                write!(f, "Unsupported storage backend: {}", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// === ClientError ===

/// Errors returned by the HTTP client data service.
#[derive(Debug)]
pub enum ClientError {
    /// The server answered with a non-success status.
    Api {
        status: u16,
        message: String,
        details: Vec<ErrorDetail>,
    },
    /// The payload failed validation locally and was never sent.
    Invalid(Vec<ErrorDetail>),
    /// The request never produced a usable response.
    Transport(String),
    /// The base URL or a request path could not be built.
    InvalidUrl(String),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn details(&self) -> &[ErrorDetail] {
        match self {
            ClientError::Api { details, .. } | ClientError::Invalid(details) => details,
            _ => &[],
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Api { message, .. } => write!(f, "{}", message),
            ClientError::Invalid(_) => write!(f, "Validation failed"),
            ClientError::Transport(msg) => write!(f, "Request failed: {}", msg),
            ClientError::InvalidUrl(msg) => write!(f, "Invalid API URL: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}
