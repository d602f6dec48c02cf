//! Helpers for integration tests.

use tempfile::TempDir;

use brandboard::repository::SnapshotRepository;
use brandboard::storage::FileStorage;

/// Temporary data directory used in integration tests. Reopening the
/// repository over the same directory simulates an application restart.
pub struct TestStore {
    dir: TempDir,
}

impl TestStore {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp data dir"),
        }
    }

    /// Open a repository over this test's data directory.
    pub fn open(&self) -> SnapshotRepository<FileStorage> {
        let storage = FileStorage::open(self.dir.path()).expect("failed to open storage");
        SnapshotRepository::open(storage).expect("failed to open repository")
    }
}
