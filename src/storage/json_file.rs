//! Flat JSON file backend. The file holds one array of bookmark records and is
//! rewritten wholesale on every save.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::BookmarkStorage;
use crate::types::bookmark::Bookmark;
use crate::types::errors::StoreError;

pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookmarkStorage for JsonFileStorage {
    /// Reads the file.
    ///
    /// A missing or blank file, or a JSON document that is not an array, is an
    /// empty collection.
    ///
    /// # Errors
    /// - [`StoreError::Io`] if the file exists but cannot be read.
    /// - [`StoreError::Serialization`] for malformed JSON or a record that does
    ///   not decode as a bookmark.
    fn load(&self) -> Result<Vec<Bookmark>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Io(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let document: Value = serde_json::from_str(&content).map_err(|e| {
            StoreError::Serialization(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;

        if !document.is_array() {
            log::warn!(
                "{} does not hold a JSON array; treating it as empty",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        serde_json::from_value(document).map_err(|e| {
            StoreError::Serialization(format!(
                "Invalid bookmark record in {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Writes the full collection, creating parent directories if needed.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] if a directory or the file cannot be written.
    fn save(&self, bookmarks: &[Bookmark]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Io(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(bookmarks)
            .map_err(|e| StoreError::Serialization(format!("Failed to encode bookmarks: {}", e)))?;

        fs::write(&self.path, json)
            .map_err(|e| StoreError::Io(format!("Failed to write {}: {}", self.path.display(), e)))
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}
