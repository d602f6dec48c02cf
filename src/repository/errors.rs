use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The storage backend failed while loading or persisting a snapshot.
    /// Never recovered; two rapid mutations are two independent writes and
    /// the last one wins.
    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
    /// A snapshot could not be encoded or decoded.
    #[error("snapshot serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type returned by repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
