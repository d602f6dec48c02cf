//! Durable key-value slots backing the stores.
//!
//! Each store persists its whole state as one serialized snapshot under a
//! named slot. Writes are last-write-wins with no transactional grouping
//! across slots; there is no schema version field and no migration.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use thiserror::Error;

/// Errors surfaced by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure (e.g. quota or permissions). Not recovered
    /// anywhere; callers propagate it.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A slot name that cannot be mapped to the backend's namespace.
    #[error("invalid slot name `{0}`")]
    InvalidSlot(String),
}

/// Result type returned by storage backends.
pub type StorageResult<T> = Result<T, StorageError>;

/// Named key-value slots holding serialized store snapshots.
pub trait Storage: Send + Sync {
    /// Read the payload last written to `slot`, if any.
    fn load(&self, slot: &str) -> StorageResult<Option<String>>;
    /// Replace the payload stored under `slot`.
    fn store(&self, slot: &str, payload: &str) -> StorageResult<()>;
}

/// File-backed storage: one `<slot>.json` file per slot under a data
/// directory.
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) a storage directory.
    pub fn open(base_dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn slot_path(&self, slot: &str) -> StorageResult<PathBuf> {
        // Slot names map directly to file names; reject anything that
        // would escape the data directory.
        if slot.is_empty() || slot.contains(['/', '\\']) || slot.contains("..") {
            return Err(StorageError::InvalidSlot(slot.to_string()));
        }
        Ok(self.base_dir.join(format!("{slot}.json")))
    }

    /// Directory the slots live under.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl Storage for FileStorage {
    fn load(&self, slot: &str) -> StorageResult<Option<String>> {
        let path = self.slot_path(slot)?;
        match fs::read_to_string(&path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn store(&self, slot: &str, payload: &str) -> StorageResult<()> {
        let path = self.slot_path(slot)?;
        fs::write(&path, payload)?;
        Ok(())
    }
}

/// In-memory storage used by tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, slot: &str) -> StorageResult<Option<String>> {
        let slots = self.slots.read().unwrap_or_else(|e| e.into_inner());
        Ok(slots.get(slot).cloned())
    }

    fn store(&self, slot: &str, payload: &str) -> StorageResult<()> {
        let mut slots = self.slots.write().unwrap_or_else(|e| e.into_inner());
        slots.insert(slot.to_string(), payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_round_trips_a_slot() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::open(dir.path()).expect("open storage");

        assert!(storage.load("brands-storage").expect("load").is_none());
        storage.store("brands-storage", "{\"brands\":[]}").expect("store");
        assert_eq!(
            storage.load("brands-storage").expect("load").as_deref(),
            Some("{\"brands\":[]}")
        );
    }

    #[test]
    fn file_storage_overwrites_last_write_wins() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::open(dir.path()).expect("open storage");

        storage.store("auth-storage", "first").expect("store");
        storage.store("auth-storage", "second").expect("store");
        assert_eq!(
            storage.load("auth-storage").expect("load").as_deref(),
            Some("second")
        );
    }

    #[test]
    fn file_storage_rejects_escaping_slot_names() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::open(dir.path()).expect("open storage");

        assert!(matches!(
            storage.load("../outside"),
            Err(StorageError::InvalidSlot(_))
        ));
        assert!(matches!(
            storage.store("", "x"),
            Err(StorageError::InvalidSlot(_))
        ));
    }

    #[test]
    fn memory_storage_round_trips_a_slot() {
        let storage = MemoryStorage::new();
        storage.store("products-storage", "{}").expect("store");
        assert_eq!(
            storage.load("products-storage").expect("load").as_deref(),
            Some("{}")
        );
        assert!(storage.load("missing").expect("load").is_none());
    }
}
