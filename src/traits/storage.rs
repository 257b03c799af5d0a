//! Persisted session storage abstraction.

use async_trait::async_trait;
use thiserror::Error;

use crate::session::StoredSession;

/// Session storage failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Stored data exists but does not parse.
    #[error("stored session is malformed: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("home directory could not be determined")]
    NoHomeDir,
}

/// Load, save and clear the `{token, user}` pair that survives restarts.
///
/// Implementations report unparsable data as [`StorageError::Malformed`]
/// and leave discarding it to the caller.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// `Ok(None)` when nothing is stored or either half is missing.
    async fn load(&self) -> Result<Option<StoredSession>, StorageError>;

    async fn save(&self, session: &StoredSession) -> Result<(), StorageError>;

    /// Succeeds when nothing was stored.
    async fn clear(&self) -> Result<(), StorageError>;
}
