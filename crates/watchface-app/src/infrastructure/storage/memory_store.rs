//! In-memory [`PersistentStore`] for tests and dry runs.
//!
//! Clones share the same backing map, so a test can keep a handle, hand a
//! clone to the face, and inspect what the face wrote.  Reads and writes can
//! be made to fail on demand.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{check_value_len, PersistentStore, StorageError};

#[derive(Debug, Default)]
struct MemoryInner {
    values: HashMap<u32, Vec<u8>>,
    fail_reads: bool,
    fail_writes: bool,
    write_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `bytes` under `key`.
    pub fn with_value(key: u32, bytes: &[u8]) -> Self {
        let store = Self::new();
        store.lock().values.insert(key, bytes.to_vec());
        store
    }

    /// Makes every subsequent read fail with [`StorageError::Unavailable`].
    pub fn set_fail_reads(&self, fail: bool) {
        self.lock().fail_reads = fail;
    }

    /// Makes every subsequent write fail with [`StorageError::Unavailable`].
    pub fn set_fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Returns a copy of the value under `key` without going through the trait.
    pub fn value(&self, key: u32) -> Option<Vec<u8>> {
        self.lock().values.get(&key).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.lock().write_count
    }

    fn lock(&self) -> MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PersistentStore for MemoryStore {
    fn read(&self, key: u32) -> Result<Option<Vec<u8>>, StorageError> {
        let inner = self.lock();
        if inner.fail_reads {
            return Err(StorageError::Unavailable("injected read failure".into()));
        }
        Ok(inner.values.get(&key).cloned())
    }

    fn write(&mut self, key: u32, bytes: &[u8]) -> Result<(), StorageError> {
        check_value_len(key, bytes)?;
        let mut inner = self.lock();
        if inner.fail_writes {
            return Err(StorageError::Unavailable("injected write failure".into()));
        }
        inner.values.insert(key, bytes.to_vec());
        inner.write_count += 1;
        Ok(())
    }

    fn exists(&self, key: u32) -> bool {
        self.lock().values.contains_key(&key)
    }

    fn delete(&mut self, key: u32) -> Result<(), StorageError> {
        self.lock().values.remove(&key);
        Ok(())
    }
}
