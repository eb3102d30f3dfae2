//! Settings module - read-only configuration loaded at startup.

mod settings_model;

pub use settings_model::Settings;
