//! Key-value persistence for the cart blob.
//!
//! The cart manager controls what is stored; implementations only move bytes.
//! All methods take `&self` so implementations can use interior mutability
//! for shared access.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

/// Persistence errors.
///
/// The cart manager treats every store failure as non-fatal: loads fall back
/// to an empty cart and saves are logged and dropped.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store lock poisoned")]
    Poisoned,
}

/// A key-value byte store surviving process restarts.
pub trait CartStore: Send + Sync + std::fmt::Debug {
    /// Retrieve a value by key. Returns `Ok(None)` if the key does not exist.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Insert or replace a value (last-writer-wins).
    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;
}

impl<S: CartStore> CartStore for std::sync::Arc<S> {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        S::load(self, key)
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        S::save(self, key, bytes)
    }
}

/// Filesystem-backed store: one file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// first save.
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl CartStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match std::fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), bytes)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl CartStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
