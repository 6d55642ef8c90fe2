//! Default location of the bookmark data file.

use std::path::PathBuf;

/// Returns the per-user data directory for Linkshelf.
///
/// - **Linux**: `$XDG_DATA_HOME/linkshelf`, else `~/.local/share/linkshelf`
/// - **macOS**: `~/Library/Application Support/Linkshelf`
/// - **Windows**: `%APPDATA%\Linkshelf`
/// - anything else: `./linkshelf-data`
pub fn get_data_dir() -> PathBuf {
    data_dir_from(|key| std::env::var(key).ok().filter(|v| !v.is_empty()))
}

fn data_dir_from<F>(env: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let home = || PathBuf::from(env("HOME").unwrap_or_else(|| "/tmp".to_string()));

    if cfg!(target_os = "linux") {
        env("XDG_DATA_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| home().join(".local").join("share"))
            .join("linkshelf")
    } else if cfg!(target_os = "macos") {
        home().join("Library").join("Application Support").join("Linkshelf")
    } else if cfg!(target_os = "windows") {
        env("APPDATA")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(r"C:\Users\Default\AppData\Roaming"))
            .join("Linkshelf")
    } else {
        PathBuf::from("linkshelf-data")
    }
}
