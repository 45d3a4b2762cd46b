//! Visitor-scope records in the tower-sessions session.

use tower_sessions::Session;

use super::{KeyValueStore, StorageError, StorageKey};

/// Cart and user storage for one browser session.
#[derive(Debug, Clone)]
pub struct SessionStorage {
    session: Session,
}

impl SessionStorage {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

impl KeyValueStore for SessionStorage {
    async fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        Ok(self.session.get::<String>(key.as_str()).await?)
    }

    async fn set(&self, key: StorageKey, value: String) -> Result<(), StorageError> {
        self.session.insert(key.as_str(), value).await?;
        Ok(())
    }

    async fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        self.session.remove_value(key.as_str()).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    fn storage() -> SessionStorage {
        SessionStorage::new(Session::new(None, Arc::new(MemoryStore::default()), None))
    }

    #[tokio::test]
    async fn test_round_trip() {
        let storage = storage();
        assert_eq!(storage.get(StorageKey::Cart).await.unwrap(), None);

        storage
            .set(StorageKey::Cart, "[]".to_string())
            .await
            .unwrap();
        assert_eq!(
            storage.get(StorageKey::Cart).await.unwrap().as_deref(),
            Some("[]")
        );

        storage.remove(StorageKey::Cart).await.unwrap();
        assert_eq!(storage.get(StorageKey::Cart).await.unwrap(), None);
    }
}
