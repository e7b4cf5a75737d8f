//! Key-value storage backends
//!
//! [`PaletteStore`](super::PaletteStore) only needs a string slot per key, so
//! the backend is a small trait. [`FileStorage`] keeps one JSON file per key
//! on disk; [`MemoryStorage`] keeps everything in memory and is what the
//! tests drive.

use crate::core::error::{PaletteError, Result};
use log::{debug, trace};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A string-valued key-value store
pub trait KeyValueStorage {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(PaletteError::Storage(format!(
            "Invalid storage key '{}': use letters, digits, '_' or '-'",
            key
        )))
    }
}

// =============================================================================
// File storage
// =============================================================================

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a file-backed store rooted at `dir`
    ///
    /// The directory is created lazily on first write.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Directory the store writes into
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        let path = self.path_for(key);

        if !path.exists() {
            trace!("No storage file at {}", path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            PaletteError::Storage(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        Ok(Some(content))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;

        fs::create_dir_all(&self.dir).map_err(|e| {
            PaletteError::Storage(format!(
                "Failed to create storage directory '{}': {}",
                self.dir.display(),
                e
            ))
        })?;

        // Write a sibling file and rename over the target so readers never
        // see a half-written collection.
        let path = self.path_for(key);
        let tmp_path = self.dir.join(format!(".{}.json.tmp", key));

        fs::write(&tmp_path, value).map_err(|e| {
            PaletteError::Storage(format!("Failed to write '{}': {}", tmp_path.display(), e))
        })?;
        fs::rename(&tmp_path, &path).map_err(|e| {
            PaletteError::Storage(format!(
                "Failed to replace '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

// =============================================================================
// Memory storage
// =============================================================================

/// In-memory backend that records writes and can simulate write failures
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, e.g. with corrupt data
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Number of successful `set` calls
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Make subsequent writes fail (e.g. to mimic a full disk or quota)
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw stored value for `key`
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        if self.fail_writes {
            return Err(PaletteError::Storage(format!(
                "Storage quota exceeded while writing '{}'",
                key
            )));
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
