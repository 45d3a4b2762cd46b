//! In-process storage backend for tests.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{KeyValueStore, StorageError, StorageKey};

/// A `HashMap` behind a lock. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<StorageKey, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `key` with a raw value.
    #[must_use]
    pub fn with(self, key: StorageKey, value: impl Into<String>) -> Self {
        self.entries.write().insert(key, value.into());
        self
    }

    /// Raw value currently stored under `key`.
    #[must_use]
    pub fn raw(&self, key: StorageKey) -> Option<String> {
        self.entries.read().get(&key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    async fn set(&self, key: StorageKey, value: String) -> Result<(), StorageError> {
        self.entries.write().insert(key, value);
        Ok(())
    }

    async fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        self.entries.write().remove(&key);
        Ok(())
    }
}
