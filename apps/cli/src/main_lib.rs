use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use workshop_core::dataset::{
    DatasetProviderTrait, DatasetStore, JsonDatasetProvider, MockDatasetProvider,
};
use workshop_core::export::ExportService;
use workshop_core::fx::RateTable;
use workshop_core::queries::QueryService;
use workshop_core::settings::Settings;

use crate::config::Config;
use crate::models::Report;

pub struct AppState {
    pub settings: Settings,
    pub rates: Arc<RateTable>,
    pub store: DatasetStore,
}

impl AppState {
    /// Query service over the current snapshot.
    pub fn queries(&self) -> QueryService {
        QueryService::new(self.store.snapshot(), self.rates.clone())
    }
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let settings = match &config.settings_path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let rates = Arc::new(settings.rate_table()?);

    let provider: Arc<dyn DatasetProviderTrait> = match &settings.dataset_path {
        Some(path) => {
            tracing::info!("Dataset source: {}", path.display());
            Arc::new(JsonDatasetProvider::new(path))
        }
        None => {
            tracing::info!("Dataset source: built-in mock data");
            Arc::new(MockDatasetProvider)
        }
    };
    let store = DatasetStore::new(provider)?;

    Ok(AppState {
        settings,
        rates,
        store,
    })
}

pub fn build_report(state: &AppState) -> Report {
    let queries = state.queries();

    let most_popular_account_type = match queries.most_popular_account_type() {
        Ok(account_type) => Some(account_type.to_string()),
        Err(e) => {
            tracing::warn!("No most popular account type: {}", e);
            None
        }
    };

    Report {
        holdings: queries.holding_names_as_string(),
        holdings_with_companies: queries.holdings_with_companies_count(),
        companies: queries.companies_count(),
        users: queries.users_count(),
        accounts: queries.accounts_count(),
        women: queries.women_count(),
        currencies: queries.currencies_as_string(),
        first_names: queries.user_first_names_as_string(),
        richest_woman: queries.richest_woman().map(|user| user.full_name()),
        most_popular_account_type,
        money_on_accounts: queries
            .money_on_accounts()
            .into_iter()
            .map(|(account_type, total)| (account_type.to_string(), total))
            .collect(),
    }
}

/// Export target: `WS_EXPORT_PATH` first, then the settings file.
pub fn export_target(config: &Config, state: &AppState) -> Option<PathBuf> {
    config
        .export_path
        .clone()
        .or_else(|| state.settings.export_path.clone())
}

/// Writes every account of the current snapshot to `path`.
pub fn run_export(state: &AppState, path: &Path) -> anyhow::Result<usize> {
    let snapshot = state.store.snapshot();
    let written = ExportService::new().write_accounts(path, snapshot.accounts())?;
    Ok(written)
}
