//! Bookmark Manager for Linkshelf.
//!
//! Implements `BookmarkManagerTrait`: the ordered in-memory bookmark collection,
//! mirrored to a [`BookmarkStorage`] backend after every mutation.

use chrono::{SubsecRound, Utc};
use uuid::Uuid;

use crate::managers::seed::seed_bookmarks;
use crate::services::normalizer::normalize;
use crate::storage::BookmarkStorage;
use crate::types::bookmark::{Bookmark, BookmarkInput};
use crate::types::errors::StoreError;

/// Trait defining bookmark store operations.
///
/// `update` and `delete` return `Ok(None)` when no bookmark has the given id;
/// the caller decides how to report it.
pub trait BookmarkManagerTrait {
    fn list(&self, tag: Option<&str>) -> Vec<Bookmark>;
    fn get(&self, id: &str) -> Option<Bookmark>;
    fn create(&mut self, input: &BookmarkInput) -> Result<Bookmark, StoreError>;
    fn update(&mut self, id: &str, input: &BookmarkInput) -> Result<Option<Bookmark>, StoreError>;
    fn delete(&mut self, id: &str) -> Result<Option<Bookmark>, StoreError>;
}

/// Bookmark store owning its collection and persistence backend.
pub struct BookmarkManager {
    storage: Box<dyn BookmarkStorage>,
    bookmarks: Vec<Bookmark>,
}

impl BookmarkManager {
    /// Loads the collection from `storage`.
    ///
    /// An empty stored collection is replaced by the built-in seed set, which
    /// is persisted immediately. A non-empty collection is used as-is.
    ///
    /// # Errors
    /// Returns the backend's [`StoreError`] if loading fails, or if the seed set
    /// cannot be saved.
    pub fn open(storage: Box<dyn BookmarkStorage>) -> Result<Self, StoreError> {
        let mut bookmarks = storage.load()?;
        if bookmarks.is_empty() {
            bookmarks = seed_bookmarks();
            storage.save(&bookmarks)?;
            log::info!(
                "Seeded {} example bookmarks into {}",
                bookmarks.len(),
                storage.describe()
            );
        } else {
            log::info!(
                "Loaded {} bookmarks from {}",
                bookmarks.len(),
                storage.describe()
            );
        }
        Ok(Self { storage, bookmarks })
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.bookmarks.iter().position(|b| b.id == id)
    }

    /// Returns an id not used by any bookmark in the collection.
    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.storage.save(&self.bookmarks)
    }
}

impl BookmarkManagerTrait for BookmarkManager {
    /// Lists bookmarks in insertion order, optionally only those carrying `tag`.
    ///
    /// An empty tag is treated as no filter.
    fn list(&self, tag: Option<&str>) -> Vec<Bookmark> {
        match tag.filter(|t| !t.is_empty()) {
            Some(tag) => self
                .bookmarks
                .iter()
                .filter(|b| b.has_tag(tag))
                .cloned()
                .collect(),
            None => self.bookmarks.clone(),
        }
    }

    fn get(&self, id: &str) -> Option<Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id).cloned()
    }

    /// Appends a new bookmark built from the normalized payload.
    ///
    /// # Errors
    /// Returns the backend's [`StoreError`] if the save fails; the collection is
    /// left as it was.
    fn create(&mut self, input: &BookmarkInput) -> Result<Bookmark, StoreError> {
        let fields = normalize(input);
        let bookmark = Bookmark {
            id: self.fresh_id(),
            url: fields.url,
            title: fields.title,
            description: fields.description,
            tags: fields.tags,
            created_at: Utc::now().trunc_subsecs(3),
        };

        self.bookmarks.push(bookmark.clone());
        if let Err(e) = self.persist() {
            self.bookmarks.pop();
            return Err(e);
        }

        log::info!("Created bookmark {} ({})", bookmark.id, bookmark.url);
        Ok(bookmark)
    }

    /// Replaces url, title, description and tags; id and createdAt are kept.
    fn update(&mut self, id: &str, input: &BookmarkInput) -> Result<Option<Bookmark>, StoreError> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };

        let fields = normalize(input);
        let updated = Bookmark {
            url: fields.url,
            title: fields.title,
            description: fields.description,
            tags: fields.tags,
            ..self.bookmarks[index].clone()
        };

        let previous = std::mem::replace(&mut self.bookmarks[index], updated.clone());
        if let Err(e) = self.persist() {
            self.bookmarks[index] = previous;
            return Err(e);
        }

        log::info!("Updated bookmark {}", id);
        Ok(Some(updated))
    }

    /// Removes a bookmark and returns it.
    fn delete(&mut self, id: &str) -> Result<Option<Bookmark>, StoreError> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };

        let removed = self.bookmarks.remove(index);
        if let Err(e) = self.persist() {
            self.bookmarks.insert(index, removed);
            return Err(e);
        }

        log::info!("Deleted bookmark {}", id);
        Ok(Some(removed))
    }
}
