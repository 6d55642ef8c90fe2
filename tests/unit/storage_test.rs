//! Unit tests for the storage backends behind `BookmarkStorage`.

use std::fs;

use chrono::{TimeZone, Utc};
use linkshelf::storage::{BookmarkStorage, JsonFileStorage};
use linkshelf::types::bookmark::Bookmark;
use linkshelf::types::errors::StoreError;
use tempfile::TempDir;

fn bookmark(id: &str, tags: &[&str], minute: u32) -> Bookmark {
    Bookmark {
        id: id.to_string(),
        url: format!("https://example.com/{}", id),
        title: format!("Bookmark {}", id),
        description: format!("about {}", id),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        created_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, minute, 30).unwrap(),
    }
}

// ─── JSON file ───

#[test]
fn test_json_missing_file_loads_empty() {
    let tmp = TempDir::new().unwrap();
    let storage = JsonFileStorage::new(tmp.path().join("absent.json"));
    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn test_json_save_writes_camel_case_pretty_array() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bookmarks.json");
    let storage = JsonFileStorage::new(&path);

    storage.save(&[bookmark("a", &["x", "y"], 5)]).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.starts_with("[\n  {"), "expected two-space pretty JSON, got: {raw}");
    assert!(raw.contains("\"createdAt\": \"2026-03-01T12:05:30.000Z\""));
    assert!(!raw.contains("created_at"));
}

#[test]
fn test_json_save_then_load_preserves_order() {
    let tmp = TempDir::new().unwrap();
    let storage = JsonFileStorage::new(tmp.path().join("bookmarks.json"));
    let records = vec![bookmark("c", &[], 1), bookmark("a", &["x"], 2), bookmark("b", &["x", "x"], 3)];

    storage.save(&records).unwrap();
    assert_eq!(storage.load().unwrap(), records);
}

#[test]
fn test_json_save_creates_parent_directories() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("dir").join("bookmarks.json");
    let storage = JsonFileStorage::new(&path);

    storage.save(&[bookmark("a", &[], 0)]).unwrap();
    assert!(path.exists());
}

#[test]
fn test_json_load_accepts_missing_optional_fields() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bookmarks.json");
    fs::write(
        &path,
        r#"[{"id":"1","url":"https://a.com","title":"A","createdAt":"2026-01-01T00:00:00Z"}]"#,
    )
    .unwrap();

    let loaded = JsonFileStorage::new(&path).load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].description, "");
    assert!(loaded[0].tags.is_empty());
}

#[test]
fn test_json_invalid_record_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bookmarks.json");
    fs::write(&path, r#"[{"id": 1}]"#).unwrap();
    assert!(matches!(
        JsonFileStorage::new(&path).load(),
        Err(StoreError::Serialization(_))
    ));
}

#[test]
fn test_json_unreadable_path_is_io_error() {
    let tmp = TempDir::new().unwrap();
    // A directory cannot be read as a file.
    let storage = JsonFileStorage::new(tmp.path());
    assert!(matches!(storage.load(), Err(StoreError::Io(_))));
    assert!(matches!(storage.save(&[]), Err(StoreError::Io(_))));
}

// ─── SQLite ───

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use linkshelf::database::migrations::{get_schema_version, CURRENT_SCHEMA_VERSION};
    use linkshelf::database::Database;
    use linkshelf::storage::SqliteStorage;

    #[test]
    fn test_migrations_create_bookmarks_table() {
        let db = Database::open_in_memory().expect("open_in_memory failed");
        let conn = db.connection();
        let exists: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='bookmarks'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists);
        assert_eq!(get_schema_version(conn), CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn test_sqlite_empty_database_loads_empty() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_sqlite_save_replaces_whole_collection_in_order() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        storage
            .save(&[bookmark("a", &["x"], 1), bookmark("b", &[], 2)])
            .unwrap();

        let second = vec![bookmark("z", &["q", "r"], 3), bookmark("a", &["x"], 1)];
        storage.save(&second).unwrap();
        assert_eq!(storage.load().unwrap(), second);
    }

    #[test]
    fn test_sqlite_file_survives_reopen() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bookmarks.db");
        let records = vec![bookmark("a", &["docs"], 4)];
        SqliteStorage::open(&path).unwrap().save(&records).unwrap();

        let reopened = SqliteStorage::open(&path).unwrap();
        assert_eq!(reopened.load().unwrap(), records);
        assert!(reopened.describe().contains("bookmarks.db"));
    }
}
