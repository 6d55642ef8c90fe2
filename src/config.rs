//! Runtime configuration read from environment variables.
//!
//! | Variable              | Default                              |
//! |-----------------------|--------------------------------------|
//! | `PORT`                | `3000`                               |
//! | `LINKSHELF_HOST`      | `127.0.0.1`                          |
//! | `LINKSHELF_DATA_DIR`  | platform data directory              |
//! | `LINKSHELF_DATA_FILE` | `<data dir>/bookmarks.json`          |
//! | `LINKSHELF_STORAGE`   | `json` (or `sqlite`)                 |
//! | `LINKSHELF_LOG_LEVEL` | `info`                               |
//! | `LINKSHELF_API_URL`   | `http://localhost:3000` (client only)|

use std::path::PathBuf;

use log::LevelFilter;

use crate::platform;
use crate::storage::{BookmarkStorage, JsonFileStorage};
use crate::types::errors::{ConfigError, StoreError};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_DATA_FILE_NAME: &str = "bookmarks.json";

/// Which persistence backend the server uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Json,
    Sqlite,
}

impl StorageKind {
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_lowercase().as_str() {
            "json" => Ok(StorageKind::Json),
            "sqlite" => Ok(StorageKind::Sqlite),
            other => Err(ConfigError::UnsupportedStorage(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_file: PathBuf,
    pub storage: StorageKind,
    pub log_level: LevelFilter,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidValue`] for a `PORT` that is not a `u16` or an
    ///   unknown `LINKSHELF_LOG_LEVEL`.
    /// - [`ConfigError::UnsupportedStorage`] for an unknown `LINKSHELF_STORAGE`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        let host = lookup("LINKSHELF_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let data_file = match lookup("LINKSHELF_DATA_FILE") {
            Some(file) => PathBuf::from(file),
            None => {
                let dir = lookup("LINKSHELF_DATA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(platform::get_data_dir);
                dir.join(DEFAULT_DATA_FILE_NAME)
            }
        };

        let storage = match lookup("LINKSHELF_STORAGE") {
            Some(raw) => StorageKind::parse(&raw)?,
            None => StorageKind::Json,
        };

        let log_level = match lookup("LINKSHELF_LOG_LEVEL") {
            Some(raw) => parse_level(&raw)?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            host,
            port,
            data_file,
            storage,
            log_level,
        })
    }

    /// Opens the configured storage backend.
    pub fn open_storage(&self) -> Result<Box<dyn BookmarkStorage>, StoreError> {
        match self.storage {
            StorageKind::Json => Ok(Box::new(JsonFileStorage::new(&self.data_file))),
            #[cfg(feature = "sqlite")]
            StorageKind::Sqlite => {
                if let Some(parent) = self.data_file.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent).map_err(|e| {
                            StoreError::Io(format!("Failed to create {}: {}", parent.display(), e))
                        })?;
                    }
                }
                Ok(Box::new(crate::storage::SqliteStorage::open(&self.data_file)?))
            }
            #[cfg(not(feature = "sqlite"))]
            StorageKind::Sqlite => Err(StoreError::Database(
                "sqlite storage is not compiled into this build".to_string(),
            )),
        }
    }
}

fn parse_level(raw: &str) -> Result<LevelFilter, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::Trace),
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        "off" => Ok(LevelFilter::Off),
        _ => Err(ConfigError::InvalidValue {
            key: "LINKSHELF_LOG_LEVEL".to_string(),
            value: raw.to_string(),
        }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("LINKSHELF_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { api_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
