//! Settings domain model.

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{Error, Result};
use crate::fx::{Currency, ExchangeRate, RateTable};

/// Workshop configuration.
///
/// Every field has a default, so an empty JSON object is a valid settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub reference_currency: Currency,
    /// Overrides applied on top of the default rate table
    pub rates: Vec<ExchangeRate>,
    /// Export target used when the caller does not name one
    pub export_path: Option<PathBuf>,
    /// JSON dataset to load instead of the built-in mock data
    pub dataset_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            reference_currency: Currency::Pln,
            rates: Vec::new(),
            export_path: None,
            dataset_path: None,
        }
    }
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading settings from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Unable to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    /// Builds the validated rate table described by these settings.
    pub fn rate_table(&self) -> Result<RateTable> {
        RateTable::new(self.reference_currency, &self.rates)
    }
}
