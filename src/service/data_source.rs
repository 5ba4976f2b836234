use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::{
    domain::{AdmissionFormData, Announcement, Branch, GalleryEvent, Instructor},
    error::Result,
    repository::{CollectionKey, CollectionStore},
    service::seed_data::SeedData,
};

/// Everything the pages need from "the server". Swapping this for a real
/// backend leaves the handlers untouched.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_announcements(&self) -> Result<Vec<Announcement>>;
    async fn fetch_gallery_events(&self) -> Result<Vec<GalleryEvent>>;
    async fn fetch_instructors(&self) -> Result<Vec<Instructor>>;
    async fn fetch_branches(&self) -> Result<Vec<Branch>>;
    async fn submit_admission(&self, form: AdmissionFormData) -> Result<AdmissionReceipt>;
}

#[derive(Debug, Clone, Serialize)]
pub struct AdmissionReceipt {
    pub success: bool,
    pub reference: Uuid,
}

/// Reads persisted collections, falling back to seed data for anything the
/// store doesn't hold. Submissions are logged and acknowledged, never stored.
pub struct StoreBackedDataSource {
    store: Arc<dyn CollectionStore>,
    seed: Arc<SeedData>,
    submission_delay: Duration,
}

impl StoreBackedDataSource {
    pub fn new(store: Arc<dyn CollectionStore>, seed: Arc<SeedData>, submission_delay: Duration) -> Self {
        Self {
            store,
            seed,
            submission_delay,
        }
    }

    async fn load<T>(&self, key: CollectionKey, fallback: &[T]) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Clone,
    {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(fallback.to_vec());
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::warn!(collection = %key, "Stored collection is unreadable, serving seed data: {}", e);
                Ok(fallback.to_vec())
            }
        }
    }
}

#[async_trait]
impl DataSource for StoreBackedDataSource {
    async fn fetch_announcements(&self) -> Result<Vec<Announcement>> {
        self.load(CollectionKey::Announcements, &self.seed.announcements).await
    }

    async fn fetch_gallery_events(&self) -> Result<Vec<GalleryEvent>> {
        self.load(CollectionKey::Gallery, &self.seed.gallery).await
    }

    async fn fetch_instructors(&self) -> Result<Vec<Instructor>> {
        self.load(CollectionKey::Instructors, &self.seed.instructors).await
    }

    async fn fetch_branches(&self) -> Result<Vec<Branch>> {
        Ok(self.seed.branches.clone())
    }

    async fn submit_admission(&self, form: AdmissionFormData) -> Result<AdmissionReceipt> {
        if !self.submission_delay.is_zero() {
            tokio::time::sleep(self.submission_delay).await;
        }

        let reference = Uuid::new_v4();
        let record = serde_json::to_string(&form)?;
        tracing::info!(%reference, student = %form.student_full_name, "Admission form submitted: {}", record);

        Ok(AdmissionReceipt {
            success: true,
            reference,
        })
    }
}

/// Store `items` under `key`, replacing whatever was there.
pub async fn persist_collection<T: Serialize>(
    store: &dyn CollectionStore,
    key: CollectionKey,
    items: &[T],
) -> Result<()> {
    let raw = serde_json::to_string(items)?;
    store.put(key, &raw).await
}
