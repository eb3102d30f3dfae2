//! Export module - pipe-delimited flat file of accounts.

mod export_errors;
mod export_model;
mod export_service;

pub use export_errors::ExportError;
pub use export_model::{parse_export_line, ExportRecord};
pub use export_service::ExportService;
