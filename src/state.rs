// src/state.rs

use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::errors::ServerError;
use crate::store::{self, DataError, RecordStore};
use crate::templates::images::DistrictImages;
use std::sync::{Arc, RwLock};
use tracing::{debug, error, info};

/// Shared by every worker. The dataset slot holds either the loaded
/// dashboard or the error from the last load attempt.
pub struct AppState {
    pub config: Config,
    pub images: DistrictImages,
    dataset: RwLock<Result<Arc<Dashboard>, DataError>>,
}

impl AppState {
    /// Loads the dataset once. A failed load is kept and shown to users
    /// until someone retries.
    pub fn load(config: Config) -> Self {
        let dataset = Self::fetch(&config);
        Self::with_dataset(config, dataset)
    }

    pub fn with_dataset(config: Config, dataset: Result<Arc<Dashboard>, DataError>) -> Self {
        let images = DistrictImages::new(config.assets_dir.clone());
        Self {
            config,
            images,
            dataset: RwLock::new(dataset),
        }
    }

    pub fn dashboard(&self) -> Result<Arc<Dashboard>, ServerError> {
        let slot = self.dataset.read().map_err(|_| ServerError::InternalError)?;
        match &*slot {
            Ok(dashboard) => Ok(Arc::clone(dashboard)),
            Err(e) => Err(ServerError::Data(e.clone())),
        }
    }

    /// Retries a failed load. A dataset that already loaded is kept as is.
    pub fn reload(&self) -> Result<usize, ServerError> {
        if let Some(count) = self.loaded_count()? {
            debug!(count, "dataset already loaded, retry ignored");
            return Ok(count);
        }

        let dataset = Self::fetch(&self.config);

        let mut slot = self.dataset.write().map_err(|_| ServerError::InternalError)?;
        // Another worker may have finished a retry while this one was fetching.
        if let Ok(current) = &*slot {
            return Ok(current.records().len());
        }
        let loaded = dataset
            .as_ref()
            .map(|d| d.records().len())
            .map_err(|e| ServerError::Data(e.clone()));
        *slot = dataset;

        loaded
    }

    fn loaded_count(&self) -> Result<Option<usize>, ServerError> {
        let slot = self.dataset.read().map_err(|_| ServerError::InternalError)?;
        Ok(slot.as_ref().ok().map(|d| d.records().len()))
    }

    fn fetch(config: &Config) -> Result<Arc<Dashboard>, DataError> {
        match store::load(&config.data_source, config.fetch_timeout) {
            Ok(records) => {
                info!(count = records.len(), "dataset ready");
                Ok(Arc::new(Dashboard::new(RecordStore::new(records))))
            }
            Err(e) => {
                error!(source = %config.data_source, "failed to load listings: {e}");
                Err(e)
            }
        }
    }
}
