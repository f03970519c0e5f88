// Cache path utilities.
// Constructs filesystem paths for the store, the log file, and per-key entries.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Get the base cache directory (~/.cache/snapfeed on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "snapfeed").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Directory holding key-value entries under a cache root.
pub fn store_dir(root: &Path) -> PathBuf {
    root.join("store")
}

/// Path to the log file under a cache root.
pub fn log_path(root: &Path) -> PathBuf {
    root.join("snapfeed.log")
}

/// Path to the file backing a single key.
pub fn entry_path(store_dir: &Path, key: &str) -> PathBuf {
    store_dir.join(format!("{}.json", sanitize_name(key)))
}

/// Sanitize a name for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '.' => '_',
            _ => c,
        })
        .collect()
}
