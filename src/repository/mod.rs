use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod memory_store;
pub mod sqlite_store;

pub use memory_store::MemoryCollectionStore;
pub use sqlite_store::SqliteCollectionStore;

/// The collections a site operator can persist. Branches are intentionally
/// absent: they are always served from seed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKey {
    Announcements,
    Gallery,
    Instructors,
}

impl CollectionKey {
    pub const ALL: [CollectionKey; 3] = [
        CollectionKey::Announcements,
        CollectionKey::Gallery,
        CollectionKey::Instructors,
    ];

    /// The name the collection is stored under.
    pub fn storage_key(&self) -> &'static str {
        match self {
            CollectionKey::Announcements => "sf_announcements",
            CollectionKey::Gallery => "sf_gallery",
            CollectionKey::Instructors => "sf_instructors",
        }
    }

    pub fn from_storage_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.storage_key() == key)
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "announcements" => Some(CollectionKey::Announcements),
            "gallery" | "gallery_events" | "gallery-events" => Some(CollectionKey::Gallery),
            "instructors" => Some(CollectionKey::Instructors),
            _ => None,
        }
    }
}

impl fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_key())
    }
}

/// Key/value storage of serialized collections. Writers are not
/// coordinated: the last `put` for a key wins.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// The serialized collection, or `None` when nothing is stored.
    async fn get(&self, key: CollectionKey) -> Result<Option<String>>;
    async fn put(&self, key: CollectionKey, value: &str) -> Result<()>;
    async fn remove(&self, key: CollectionKey) -> Result<()>;
    /// Keys that currently hold a value.
    async fn keys(&self) -> Result<Vec<CollectionKey>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys() {
        assert_eq!(CollectionKey::Announcements.storage_key(), "sf_announcements");
        assert_eq!(CollectionKey::Gallery.storage_key(), "sf_gallery");
        assert_eq!(CollectionKey::Instructors.storage_key(), "sf_instructors");
        assert_eq!(CollectionKey::from_storage_key("sf_gallery"), Some(CollectionKey::Gallery));
        assert_eq!(CollectionKey::from_storage_key("sf_branches"), None);
    }

    #[test]
    fn test_parse_collection_name() {
        assert_eq!(CollectionKey::parse("Gallery"), Some(CollectionKey::Gallery));
        assert_eq!(CollectionKey::parse("instructors"), Some(CollectionKey::Instructors));
        assert_eq!(CollectionKey::parse("branches"), None);
    }
}
