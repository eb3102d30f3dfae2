//! Core error types for the workshop queries.
//!
//! Every failure is local to the operation that raised it. The dataset is never
//! touched by a failed query, so callers can keep using the same snapshot.

use thiserror::Error;

use crate::export::ExportError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the workshop crate.
#[derive(Error, Debug)]
pub enum Error {
    /// A single-result lookup matched nothing.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// An aggregation has no well-defined answer for the given input.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Requested {requested} distinct elements but only {available} are available")]
    BoundsViolation { requested: usize, available: usize },

    /// Two entries produced the same key while building a lookup table.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Currency '{0}' is not supported")]
    UnsupportedCurrency(String),

    #[error("Account type '{0}' is not supported")]
    UnsupportedAccountType(String),

    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),

    #[error("Failed to load configuration: {0}")]
    Config(String),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for parsed input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::Json(err))
    }
}
