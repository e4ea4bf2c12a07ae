//! Keyed record storage for history
//!
//! A backend stores whole string records under a key, the way browser local
//! storage does. There is no partial update: every write replaces the record.
//!
//! - MemoryBackend keeps records in a shared map (tests, ephemeral sessions)
//! - FileBackend keeps one `<key>.json` file per record in a data directory,
//!   written atomically via temp file + fsync + rename

use parking_lot::Mutex;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use woundsearch_core::{Error, Result};

// ============================================================================
// HistoryBackend Trait
// ============================================================================

/// Keyed record storage
///
/// Implementations report failures as `io::Error`; callers decide whether a
/// failure is fatal. Must be Send + Sync so a store can move between threads.
pub trait HistoryBackend: Send + Sync {
    /// Read the record under `key`, `Ok(None)` if there is none
    fn read(&self, key: &str) -> io::Result<Option<String>>;

    /// Replace the record under `key`
    fn write(&self, key: &str, value: &str) -> io::Result<()>;

    /// Delete the record under `key`; deleting a missing record succeeds
    fn remove(&self, key: &str) -> io::Result<()>;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// MemoryBackend
// ============================================================================

/// In-memory record storage
///
/// Clones share the same records, so a test can keep a handle and inspect
/// what a store persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    records: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend holding one record
    pub fn with_record(key: impl Into<String>, value: impl Into<String>) -> Self {
        let backend = Self::new();
        backend.records.lock().insert(key.into(), value.into());
        backend
    }

    /// Check whether a record exists under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.records.lock().contains_key(key)
    }
}

impl HistoryBackend for MemoryBackend {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.records.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> io::Result<()> {
        self.records.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        self.records.lock().remove(key);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// FileBackend
// ============================================================================

/// One JSON file per record in a data directory
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open a backend rooted at `dir`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            Error::Io(io::Error::new(
                e.kind(),
                format!("Failed to create data directory '{}': {}", dir.display(), e),
            ))
        })?;
        Ok(FileBackend { dir })
    }

    /// Data directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds the record for `key`
    pub fn path_for(&self, key: &str) -> io::Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid record key '{}'", key),
            ));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl HistoryBackend for FileBackend {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)?) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, key: &str, value: &str) -> io::Result<()> {
        let path = self.path_for(key)?;

        // Atomic write: temp + fsync + rename
        let tmp_path = path.with_extension("json.tmp");
        {
            use std::io::Write;
            let mut file = std::fs::File::create(&tmp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
        }
        std::fs::rename(&tmp_path, &path)
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        match std::fs::remove_file(self.path_for(key)?) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "file"
    }
}

// ============================================================================
// Tests
// ============================================================================
