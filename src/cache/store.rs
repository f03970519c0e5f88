// Key-value store for cached data.
// One file per key, written atomically, with no expiry or versioning.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::Result;

use super::paths::entry_path;

/// File-backed string store keyed by name.
#[derive(Debug, Clone)]
pub struct KeyValueStore {
    dir: PathBuf,
}

impl KeyValueStore {
    /// Create a store rooted at the given directory. Nothing is touched on disk
    /// until the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read the value stored under `key`, if any.
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = entry_path(&self.dir, key);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        debug!(key, bytes = contents.len(), "cache entry read");
        Ok(Some(contents))
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = entry_path(&self.dir, key);

        // Write atomically via temp file
        let temp_path = path.with_extension("tmp");
        let written = fs::File::create(&temp_path).and_then(|mut file| {
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
            fs::rename(&temp_path, &path)
        });
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        debug!(key, bytes = value.len(), "cache entry written");
        Ok(())
    }

    /// When the entry for `key` was last written.
    pub fn modified_at(&self, key: &str) -> Option<DateTime<Utc>> {
        let modified = fs::metadata(entry_path(&self.dir, key))
            .and_then(|meta| meta.modified())
            .ok()?;
        Some(DateTime::<Utc>::from(modified))
    }
}
