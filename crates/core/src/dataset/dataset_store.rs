use log::info;
use std::sync::{Arc, PoisonError, RwLock};

use super::dataset_model::Dataset;
use super::dataset_traits::DatasetProviderTrait;
use crate::errors::Result;

/// Holds the current dataset snapshot.
///
/// A reload builds a complete new [`Dataset`] and swaps the `Arc`; snapshots
/// already handed out keep seeing the tree they were taken from.
pub struct DatasetStore {
    provider: Arc<dyn DatasetProviderTrait>,
    current: RwLock<Arc<Dataset>>,
}

impl DatasetStore {
    /// Calls the provider once and stores the result as the first snapshot.
    pub fn new(provider: Arc<dyn DatasetProviderTrait>) -> Result<Self> {
        let dataset = Self::build(provider.as_ref())?;
        Ok(Self {
            provider,
            current: RwLock::new(Arc::new(dataset)),
        })
    }

    pub fn snapshot(&self) -> Arc<Dataset> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Rebuilds the snapshot from the provider. On failure the previous
    /// snapshot stays in place.
    pub fn reload(&self) -> Result<Arc<Dataset>> {
        let fresh = Arc::new(Self::build(self.provider.as_ref())?);
        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *current = fresh.clone();
        Ok(fresh)
    }

    fn build(provider: &dyn DatasetProviderTrait) -> Result<Dataset> {
        let dataset = Dataset::new(provider.generate()?);
        info!(
            "Dataset snapshot built: {} holdings, {} companies, {} users, {} accounts",
            dataset.holdings().len(),
            dataset.companies().count(),
            dataset.users().count(),
            dataset.accounts().count()
        );
        Ok(dataset)
    }
}
