//! File-backed [`PersistentStore`].
//!
//! Each key is one file named `<key>.bin` inside the storage directory.
//! Writes go to `<key>.bin.tmp` first and are then renamed over the real
//! file, so a crash mid-write leaves either the old value or the new one,
//! never a torn blob.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{check_value_len, PersistentStore, StorageError};

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`.  The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: u32) -> PathBuf {
        self.dir.join(format!("{key}.bin"))
    }
}

impl PersistentStore for FileStore {
    fn read(&self, key: u32) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.path_for(key);
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { key, path, source }),
        }
    }

    fn write(&mut self, key: u32, bytes: &[u8]) -> Result<(), StorageError> {
        check_value_len(key, bytes)?;

        std::fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            key,
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path_for(key);
        let tmp = path.with_extension("bin.tmp");
        std::fs::write(&tmp, bytes).map_err(|source| StorageError::Io {
            key,
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &path).map_err(|source| StorageError::Io {
            key,
            path: path.clone(),
            source,
        })?;

        debug!(key, len = bytes.len(), path = %path.display(), "value written");
        Ok(())
    }

    fn exists(&self, key: u32) -> bool {
        self.path_for(key).is_file()
    }

    fn delete(&mut self, key: u32) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { key, path, source }),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
