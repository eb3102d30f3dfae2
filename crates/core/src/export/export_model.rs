use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::export_errors::ExportError;
use crate::accounts::Account;
use crate::constants::EXPORT_FIELD_SEPARATOR;
use crate::fx::Currency;

/// One line of the export: `NUMBER|AMOUNT|CURRENCY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub number: String,
    pub amount: Decimal,
    pub currency: Currency,
}

impl From<&Account> for ExportRecord {
    fn from(account: &Account) -> Self {
        ExportRecord {
            number: account.number.clone(),
            amount: account.amount,
            currency: account.currency,
        }
    }
}

/// Parses a single export line, with or without its line terminator.
pub fn parse_export_line(line: &str) -> Result<ExportRecord, ExportError> {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    let malformed = |reason: String| ExportError::MalformedLine {
        line: trimmed.to_string(),
        reason,
    };

    let fields: Vec<&str> = trimmed.split(EXPORT_FIELD_SEPARATOR as char).collect();
    let [number, amount, currency] = fields.as_slice() else {
        return Err(malformed(format!("expected 3 fields, found {}", fields.len())));
    };

    let amount = Decimal::from_str(amount).map_err(|e| malformed(e.to_string()))?;
    let currency = Currency::from_str(currency).map_err(|e| malformed(e.to_string()))?;

    Ok(ExportRecord {
        number: number.to_string(),
        amount,
        currency,
    })
}
