//! Dataset provider trait.

use crate::errors::Result;
use crate::organization::Holding;

/// Source of the holdings tree.
///
/// Called once per snapshot build. Implementations return an already
/// consistent tree; the queries never validate it.
pub trait DatasetProviderTrait: Send + Sync {
    fn generate(&self) -> Result<Vec<Holding>>;
}
