use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    error::{AppError, Result},
    repository::{CollectionKey, CollectionStore},
};

pub struct SqliteCollectionStore {
    pool: SqlitePool,
}

impl SqliteCollectionStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionStore for SqliteCollectionStore {
    async fn get(&self, key: CollectionKey) -> Result<Option<String>> {
        let value = sqlx::query_scalar::<_, String>(
            "SELECT value FROM collections WHERE key = ?"
        )
        .bind(key.storage_key())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(value)
    }

    async fn put(&self, key: CollectionKey, value: &str) -> Result<()> {
        let now = Utc::now().naive_utc();

        sqlx::query(
            r#"
            INSERT INTO collections (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#
        )
        .bind(key.storage_key())
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        tracing::debug!(collection = %key, bytes = value.len(), "Stored collection");
        Ok(())
    }

    async fn remove(&self, key: CollectionKey) -> Result<()> {
        sqlx::query("DELETE FROM collections WHERE key = ?")
            .bind(key.storage_key())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }

    async fn keys(&self) -> Result<Vec<CollectionKey>> {
        let stored = sqlx::query_scalar::<_, String>(
            "SELECT key FROM collections ORDER BY key"
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        // Rows written by other tools under unknown names are ignored
        Ok(stored
            .iter()
            .filter_map(|key| CollectionKey::from_storage_key(key))
            .collect())
    }
}
