//! App Core for Linkshelf.
//!
//! Owns the bookmark store handed to the HTTP layer.

use crate::config::ServerConfig;
use crate::managers::bookmark_manager::BookmarkManager;
use crate::storage::BookmarkStorage;
use crate::types::errors::StoreError;

/// Central application struct. The HTTP layer shares it behind a mutex.
pub struct App {
    pub bookmark_manager: BookmarkManager,
}

impl App {
    /// Opens the configured storage backend and loads (or seeds) the collection.
    ///
    /// # Errors
    /// Returns a [`StoreError`] if the backend cannot be opened, loaded or seeded.
    pub fn new(config: &ServerConfig) -> Result<Self, StoreError> {
        Self::with_storage(config.open_storage()?)
    }

    pub fn with_storage(storage: Box<dyn BookmarkStorage>) -> Result<Self, StoreError> {
        Ok(Self {
            bookmark_manager: BookmarkManager::open(storage)?,
        })
    }
}
