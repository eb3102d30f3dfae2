use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary printed by the CLI.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub holdings: String,
    pub holdings_with_companies: usize,
    pub companies: usize,
    pub users: usize,
    pub accounts: usize,
    pub women: usize,
    pub currencies: String,
    pub first_names: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub richest_woman: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_popular_account_type: Option<String>,
    /// Converted balance per account type, keyed by type name
    pub money_on_accounts: BTreeMap<String, Decimal>,
}
