//! Storage infrastructure: the watch's durable key-value store and the host
//! configuration file.
//!
//! - **`file_store`** – One file per key in a directory; what the simulator
//!   uses so settings survive a restart.
//! - **`memory_store`** – In-process map with failure injection, for tests.
//! - **`config`** – The host TOML configuration (`[face]`, `[storage]`, ...).
//!
//! The settings sync loop only sees the [`PersistentStore`] trait, so the
//! backing medium can change without touching the application layer.

pub mod config;
pub mod file_store;
pub mod memory_store;

use std::path::PathBuf;

use thiserror::Error;

/// Largest value the store accepts under a single key, in bytes.
pub const PERSIST_DATA_MAX_LENGTH: usize = 256;

/// Error type for key-value store operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing key {key} at {path}: {source}")]
    Io {
        key: u32,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The value is larger than [`PERSIST_DATA_MAX_LENGTH`].
    #[error("value for key {key} is {len} bytes; the limit is {max}")]
    ValueTooLarge { key: u32, len: usize, max: usize },

    /// The store cannot be reached at all.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable key → bytes store.
///
/// A missing key is `Ok(None)`, never an error.  Writes replace the whole
/// value unconditionally.
#[cfg_attr(test, mockall::automock)]
pub trait PersistentStore {
    /// Returns the bytes stored under `key`, or `None` if nothing is stored.
    fn read(&self, key: u32) -> Result<Option<Vec<u8>>, StorageError>;

    /// Stores `bytes` under `key`, replacing any previous value.
    fn write(&mut self, key: u32, bytes: &[u8]) -> Result<(), StorageError>;

    fn exists(&self, key: u32) -> bool;

    /// Removes `key`.  Removing a missing key succeeds.
    fn delete(&mut self, key: u32) -> Result<(), StorageError>;
}

/// Rejects values the store would not accept.
pub(crate) fn check_value_len(key: u32, bytes: &[u8]) -> Result<(), StorageError> {
    if bytes.len() > PERSIST_DATA_MAX_LENGTH {
        return Err(StorageError::ValueTooLarge {
            key,
            len: bytes.len(),
            max: PERSIST_DATA_MAX_LENGTH,
        });
    }
    Ok(())
}
