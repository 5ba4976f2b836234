pub mod data_source;
pub mod seed_data;

use std::{sync::Arc, time::Duration};

use crate::{admission::AdmissionSessions, config::Settings, repository::CollectionStore};
use data_source::StoreBackedDataSource;

pub use data_source::{persist_collection, AdmissionReceipt, DataSource};
pub use seed_data::SeedData;

pub struct ServiceContext {
    pub collections: Arc<dyn CollectionStore>,
    pub data: Arc<dyn DataSource>,
    pub seed: Arc<SeedData>,
    pub admission_sessions: Arc<AdmissionSessions>,
}

impl ServiceContext {
    pub fn new(
        collections: Arc<dyn CollectionStore>,
        data: Arc<dyn DataSource>,
        seed: Arc<SeedData>,
        admission_sessions: Arc<AdmissionSessions>,
    ) -> Self {
        Self {
            collections,
            data,
            seed,
            admission_sessions,
        }
    }

    /// Wire the store-backed data source and session holder from settings.
    pub fn from_settings(collections: Arc<dyn CollectionStore>, settings: &Settings) -> Self {
        let seed = Arc::new(SeedData::generate());
        let data = Arc::new(StoreBackedDataSource::new(
            collections.clone(),
            seed.clone(),
            Duration::from_millis(settings.admission.submission_delay_ms),
        ));
        let admission_sessions = Arc::new(AdmissionSessions::new(settings.admission.session_ttl_minutes));

        Self::new(collections, data, seed, admission_sessions)
    }
}
