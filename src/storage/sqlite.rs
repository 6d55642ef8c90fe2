//! SQLite backend. Same whole-collection contract as the JSON file, with one
//! row per record and an explicit `position` column for insertion order.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::params;
use rusqlite::types::Type;

use super::BookmarkStorage;
use crate::database::Database;
use crate::types::bookmark::Bookmark;
use crate::types::errors::StoreError;

pub struct SqliteStorage {
    db: Database,
    label: String,
}

impl SqliteStorage {
    /// Opens the database file at `path`, creating the schema if needed.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the file cannot be opened or migrated.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let label = path.as_ref().display().to_string();
        let db = Database::open(path)?;
        Ok(Self { db, label })
    }

    /// # Errors
    /// Returns [`StoreError::Database`] if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let db = Database::open_in_memory()?;
        Ok(Self {
            db,
            label: ":memory:".to_string(),
        })
    }

    /// Reads a single `Bookmark` row into a struct.
    fn row_to_bookmark(row: &rusqlite::Row) -> rusqlite::Result<Bookmark> {
        let tags_json: String = row.get(4)?;
        let created_at: String = row.get(5)?;
        let tags: Vec<String> = serde_json::from_str(&tags_json)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?;
        Ok(Bookmark {
            id: row.get(0)?,
            url: row.get(1)?,
            title: row.get(2)?,
            description: row.get(3)?,
            tags,
            created_at,
        })
    }
}

impl BookmarkStorage for SqliteStorage {
    fn load(&self) -> Result<Vec<Bookmark>, StoreError> {
        let conn = self.db.connection();
        let mut stmt = conn.prepare(
            "SELECT id, url, title, description, tags, created_at \
             FROM bookmarks ORDER BY position",
        )?;
        let rows = stmt.query_map([], Self::row_to_bookmark)?;
        let bookmarks = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(bookmarks)
    }

    /// Replaces every row inside one transaction.
    fn save(&self, bookmarks: &[Bookmark]) -> Result<(), StoreError> {
        let tx = self.db.connection().unchecked_transaction()?;
        tx.execute("DELETE FROM bookmarks", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO bookmarks (id, position, url, title, description, tags, created_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for (position, b) in bookmarks.iter().enumerate() {
                let tags = serde_json::to_string(&b.tags)
                    .map_err(|e| StoreError::Serialization(e.to_string()))?;
                let created_at = b.created_at.to_rfc3339_opts(SecondsFormat::Millis, true);
                stmt.execute(params![
                    b.id,
                    position as i64,
                    b.url,
                    b.title,
                    b.description,
                    tags,
                    created_at
                ])?;
            }
        }
        Ok(tx.commit()?)
    }

    fn describe(&self) -> String {
        format!("sqlite database {}", self.label)
    }
}
