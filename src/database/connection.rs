use std::path::Path;
use std::time::Duration;

use rusqlite::Connection;

use super::migrations;
use crate::types::errors::StoreError;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// A SQLite connection whose schema is up to date.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) the database file at `path` and applies pending migrations.
    ///
    /// # Arguments
    /// * `path` - Database file; its parent directory must already exist.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the file cannot be opened, the
    /// pragmas cannot be set, or a migration fails.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Self::prepare(Connection::open(path)?)
    }

    /// Private, throwaway database. Dropped with the value.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if SQLite cannot allocate the database
    /// or a migration fails.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::prepare(Connection::open_in_memory()?)
    }

    fn prepare(conn: Connection) -> Result<Self, StoreError> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get::<_, String>(0))?;

        let applied = migrations::run_all(&conn)?;
        if applied > 0 {
            log::info!(
                "Applied {} schema migration(s), now at version {}",
                applied,
                migrations::get_schema_version(&conn)
            );
        }
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
