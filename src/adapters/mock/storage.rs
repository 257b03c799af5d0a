//! In-memory session storage for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::session::StoredSession;
use crate::traits::{SessionStorage, StorageError};

/// Holds the raw JSON document so tests can seed malformed data.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStorage {
    raw: Arc<Mutex<Option<String>>>,
    save_should_fail: Arc<Mutex<bool>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: &StoredSession) -> Self {
        let storage = Self::new();
        storage.set_raw(serde_json::to_string(session).ok());
        storage
    }

    /// Seed the stored document verbatim.
    pub fn with_raw(raw: &str) -> Self {
        let storage = Self::new();
        storage.set_raw(Some(raw.to_string()));
        storage
    }

    pub fn set_raw(&self, raw: Option<String>) {
        *lock(&self.raw) = raw;
    }

    pub fn raw(&self) -> Option<String> {
        lock(&self.raw).clone()
    }

    pub fn set_save_should_fail(&self, should_fail: bool) {
        *lock(&self.save_should_fail) = should_fail;
    }
}

#[async_trait]
impl SessionStorage for InMemorySessionStorage {
    async fn load(&self) -> Result<Option<StoredSession>, StorageError> {
        match self.raw() {
            Some(raw) => StoredSession::from_json(&raw),
            None => Ok(None),
        }
    }

    async fn save(&self, session: &StoredSession) -> Result<(), StorageError> {
        if *lock(&self.save_should_fail) {
            return Err(StorageError::Io("mock save failure".to_string()));
        }
        let raw = serde_json::to_string(session).map_err(|e| StorageError::Io(e.to_string()))?;
        self.set_raw(Some(raw));
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.set_raw(None);
        Ok(())
    }
}
