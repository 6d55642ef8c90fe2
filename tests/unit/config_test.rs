//! Unit tests for environment-driven configuration.

use std::collections::HashMap;
use std::path::PathBuf;

use linkshelf::config::{ClientConfig, ServerConfig, StorageKind, DEFAULT_API_URL};
use linkshelf::storage::BookmarkStorage;
use linkshelf::types::errors::ConfigError;
use log::LevelFilter;
use rstest::rstest;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ─── ServerConfig ───

#[test]
fn test_server_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.storage, StorageKind::Json);
    assert_eq!(config.log_level, LevelFilter::Info);
    assert!(config.data_file.ends_with("bookmarks.json"));
}

#[test]
fn test_server_overrides() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("LINKSHELF_HOST", "0.0.0.0"),
        ("LINKSHELF_DATA_FILE", "/tmp/shelf/links.json"),
        ("LINKSHELF_STORAGE", "SQLite"),
        ("LINKSHELF_LOG_LEVEL", "debug"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.data_file, PathBuf::from("/tmp/shelf/links.json"));
    assert_eq!(config.storage, StorageKind::Sqlite);
    assert_eq!(config.log_level, LevelFilter::Debug);
}

#[test]
fn test_data_dir_is_joined_with_default_file_name() {
    let config = ServerConfig::from_lookup(lookup(&[("LINKSHELF_DATA_DIR", "/var/lib/linkshelf")])).unwrap();
    assert_eq!(config.data_file, PathBuf::from("/var/lib/linkshelf/bookmarks.json"));
}

#[test]
fn test_data_file_wins_over_data_dir() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("LINKSHELF_DATA_DIR", "/var/lib/linkshelf"),
        ("LINKSHELF_DATA_FILE", "/srv/links.json"),
    ]))
    .unwrap();
    assert_eq!(config.data_file, PathBuf::from("/srv/links.json"));
}

#[rstest]
#[case("http")]
#[case("70000")]
#[case("-1")]
#[case("")]
fn test_invalid_port_is_rejected(#[case] port: &str) {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", port)])).unwrap_err();
    match err {
        ConfigError::InvalidValue { key, value } => {
            assert_eq!(key, "PORT");
            assert_eq!(value, port);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_unknown_storage_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("LINKSHELF_STORAGE", "redis")])).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedStorage(name) if name == "redis"));
}

#[rstest]
#[case("trace", LevelFilter::Trace)]
#[case("WARN", LevelFilter::Warn)]
#[case(" error ", LevelFilter::Error)]
#[case("off", LevelFilter::Off)]
fn test_log_levels(#[case] raw: &str, #[case] expected: LevelFilter) {
    let config = ServerConfig::from_lookup(lookup(&[("LINKSHELF_LOG_LEVEL", raw)])).unwrap();
    assert_eq!(config.log_level, expected);
}

#[test]
fn test_unknown_log_level_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("LINKSHELF_LOG_LEVEL", "loud")])).unwrap_err();
    assert_eq!(err.to_string(), "Invalid value for LINKSHELF_LOG_LEVEL: loud");
}

#[test]
fn test_json_storage_opens_without_touching_disk() {
    let tmp = tempfile::TempDir::new().unwrap();
    let file = tmp.path().join("nested").join("bookmarks.json");
    let config = ServerConfig::from_lookup(lookup(&[(
        "LINKSHELF_DATA_FILE",
        file.to_str().unwrap(),
    )]))
    .unwrap();
    let storage = config.open_storage().unwrap();
    assert!(storage.load().unwrap().is_empty());
    assert!(!file.exists());
}

// ─── ClientConfig ───

#[test]
fn test_client_default() {
    assert_eq!(ClientConfig::from_lookup(lookup(&[])).api_url, DEFAULT_API_URL);
    assert_eq!(ClientConfig::default().api_url, DEFAULT_API_URL);
}

#[rstest]
#[case("http://api.example.com/", "http://api.example.com")]
#[case("http://api.example.com/v1//", "http://api.example.com/v1")]
#[case("  ", DEFAULT_API_URL)]
fn test_client_api_url(#[case] raw: &str, #[case] expected: &str) {
    let config = ClientConfig::from_lookup(lookup(&[("LINKSHELF_API_URL", raw)]));
    assert_eq!(config.api_url, expected);
}
