//! Site-scope records in the `site_entries` table.

use sqlx::SqlitePool;

use super::{KeyValueStore, StorageError, StorageKey};

/// Shared catalog and configuration storage.
#[derive(Debug, Clone)]
pub struct SiteStorage {
    pool: SqlitePool,
}

impl SiteStorage {
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl KeyValueStore for SiteStorage {
    async fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM site_entries WHERE key = ?")
            .bind(key.as_str())
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    async fn set(&self, key: StorageKey, value: String) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO site_entries (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key.as_str())
        .bind(value)
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM site_entries WHERE key = ?")
            .bind(key.as_str())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
