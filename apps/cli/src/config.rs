use std::path::PathBuf;

pub struct Config {
    /// JSON settings file; built-in defaults when absent
    pub settings_path: Option<PathBuf>,
    /// Export target; the export is skipped when absent
    pub export_path: Option<PathBuf>,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let settings_path = std::env::var("WS_SETTINGS_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let export_path = std::env::var("WS_EXPORT_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let log_format = std::env::var("WS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        Self {
            settings_path,
            export_path,
            log_format,
        }
    }
}
