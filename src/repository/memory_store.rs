use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::Result,
    repository::{CollectionKey, CollectionStore},
};

/// Process-local store, used by tests and by the `memory` storage backend.
#[derive(Default)]
pub struct MemoryCollectionStore {
    entries: RwLock<HashMap<CollectionKey, String>>,
}

impl MemoryCollectionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CollectionStore for MemoryCollectionStore {
    async fn get(&self, key: CollectionKey) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(&key).cloned())
    }

    async fn put(&self, key: CollectionKey, value: &str) -> Result<()> {
        self.entries.write().await.insert(key, value.to_string());
        Ok(())
    }

    async fn remove(&self, key: CollectionKey) -> Result<()> {
        self.entries.write().await.remove(&key);
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<CollectionKey>> {
        let entries = self.entries.read().await;
        Ok(CollectionKey::ALL
            .into_iter()
            .filter(|key| entries.contains_key(key))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_remove() {
        let store = MemoryCollectionStore::new();
        assert_eq!(store.get(CollectionKey::Gallery).await.unwrap(), None);

        store.put(CollectionKey::Gallery, "[]").await.unwrap();
        store.put(CollectionKey::Gallery, "[1]").await.unwrap();
        assert_eq!(store.get(CollectionKey::Gallery).await.unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.keys().await.unwrap(), vec![CollectionKey::Gallery]);

        store.remove(CollectionKey::Gallery).await.unwrap();
        assert_eq!(store.get(CollectionKey::Gallery).await.unwrap(), None);
        assert!(store.keys().await.unwrap().is_empty());
    }
}
