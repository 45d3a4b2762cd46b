//! Route keys to a backend by scope.

use super::{KeyValueStore, Scope, StorageError, StorageKey};

/// Site keys go to `site`, visitor keys go to `visitor`.
#[derive(Debug, Clone)]
pub struct SplitStore<S, V> {
    site: S,
    visitor: V,
}

impl<S, V> SplitStore<S, V> {
    #[must_use]
    pub const fn new(site: S, visitor: V) -> Self {
        Self { site, visitor }
    }
}

impl<S: KeyValueStore, V: KeyValueStore> KeyValueStore for SplitStore<S, V> {
    async fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        match key.scope() {
            Scope::Site => self.site.get(key).await,
            Scope::Visitor => self.visitor.get(key).await,
        }
    }

    async fn set(&self, key: StorageKey, value: String) -> Result<(), StorageError> {
        match key.scope() {
            Scope::Site => self.site.set(key, value).await,
            Scope::Visitor => self.visitor.set(key, value).await,
        }
    }

    async fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        match key.scope() {
            Scope::Site => self.site.remove(key).await,
            Scope::Visitor => self.visitor.remove(key).await,
        }
    }
}
