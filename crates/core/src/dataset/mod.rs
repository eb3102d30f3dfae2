//! Dataset module - the frozen holdings snapshot, its providers and traversal.

mod dataset_model;
mod dataset_providers;
mod dataset_store;
mod dataset_traits;

pub use dataset_model::Dataset;
pub use dataset_providers::{JsonDatasetProvider, MockDatasetProvider, StaticDatasetProvider};
pub use dataset_store::DatasetStore;
pub use dataset_traits::DatasetProviderTrait;
