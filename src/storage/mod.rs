//! Persistence backends for the bookmark collection.
//!
//! The store keeps the whole collection in memory and hands the full list to
//! a [`BookmarkStorage`] on every mutation. Backends only need to load and
//! save an ordered list.

pub mod json_file;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use json_file::JsonFileStorage;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStorage;

use crate::types::bookmark::Bookmark;
use crate::types::errors::StoreError;

/// Trait defining how an ordered bookmark collection is persisted.
pub trait BookmarkStorage: Send {
    /// Loads the stored collection. A missing store yields an empty list.
    ///
    /// # Errors
    /// Returns a [`StoreError`] when the store exists but cannot be read or decoded.
    fn load(&self) -> Result<Vec<Bookmark>, StoreError>;
    /// Replaces the stored collection with `bookmarks`, preserving order.
    ///
    /// # Errors
    /// Returns a [`StoreError`] when nothing could be written; the previous
    /// contents are then left in place.
    fn save(&self, bookmarks: &[Bookmark]) -> Result<(), StoreError>;
    /// Human-readable location, used in log lines.
    fn describe(&self) -> String;
}
