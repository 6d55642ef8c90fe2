//! Versioned schema for the SQLite backend.
//!
//! Applied versions are recorded in `schema_version`. [`run_all`] applies the
//! missing ones in order, each in its own transaction.

use chrono::Utc;
use rusqlite::{params, Connection};

struct Migration {
    version: i32,
    description: &'static str,
    sql: &'static str,
}

/// Versions must stay contiguous from 1.
const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    description: "bookmarks table with insertion position",
    sql: "CREATE TABLE bookmarks (
              id TEXT PRIMARY KEY,
              position INTEGER NOT NULL,
              url TEXT NOT NULL,
              title TEXT NOT NULL,
              description TEXT NOT NULL DEFAULT '',
              tags TEXT NOT NULL DEFAULT '[]',
              created_at TEXT NOT NULL
          );
          CREATE INDEX idx_bookmarks_position ON bookmarks(position);",
}];

pub const CURRENT_SCHEMA_VERSION: i32 = MIGRATIONS.len() as i32;

/// Highest applied version, or 0 for a fresh database.
pub fn get_schema_version(conn: &Connection) -> i32 {
    conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
        row.get::<_, Option<i32>>(0)
    })
    .ok()
    .flatten()
    .unwrap_or(0)
}

/// Applies every pending migration and returns how many ran.
///
/// # Errors
/// Returns `rusqlite::Error` if any statement fails. The failing migration's
/// transaction is rolled back; earlier ones stay applied.
pub fn run_all(conn: &Connection) -> rusqlite::Result<usize> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
             version INTEGER PRIMARY KEY,
             applied_at TEXT NOT NULL,
             description TEXT NOT NULL
         );",
    )?;

    let current = get_schema_version(conn);
    let mut applied = 0;
    for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(migration.sql)?;
        tx.execute(
            "INSERT INTO schema_version (version, applied_at, description) VALUES (?1, ?2, ?3)",
            params![migration.version, Utc::now().to_rfc3339(), migration.description],
        )?;
        tx.commit()?;
        applied += 1;
    }
    Ok(applied)
}
