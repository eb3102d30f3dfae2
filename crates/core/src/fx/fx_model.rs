use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::currency::Currency;
use crate::errors::{Error, Result};

/// Rate of one currency expressed in the reference currency.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub currency: Currency,
    pub rate: Decimal,
}

/// Read-only mapping from currency to its rate against the reference currency.
///
/// Built once and shared; every supported currency always has a rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    reference: Currency,
    rates: [Decimal; Currency::COUNT],
}

impl RateTable {
    /// Builds a table starting from the defaults and applying `overrides`.
    ///
    /// Fails if any rate is not positive or if the reference currency does
    /// not end up with a rate of exactly one.
    pub fn new(reference: Currency, overrides: &[ExchangeRate]) -> Result<Self> {
        let mut table = RateTable {
            reference,
            ..Self::default()
        };

        for entry in overrides {
            if entry.rate <= Decimal::ZERO {
                return Err(Error::InvalidRate(format!(
                    "rate for {} must be positive, got {}",
                    entry.currency, entry.rate
                )));
            }
            table.rates[entry.currency.index()] = entry.rate;
        }

        if table.rate(reference) != Decimal::ONE {
            return Err(Error::InvalidRate(format!(
                "reference currency {} must have rate 1, got {}",
                reference,
                table.rate(reference)
            )));
        }

        Ok(table)
    }

    pub fn reference(&self) -> Currency {
        self.reference
    }

    /// Rate of `currency` in the reference currency.
    pub fn rate(&self, currency: Currency) -> Decimal {
        self.rates[currency.index()]
    }

    pub fn entries(&self) -> Vec<ExchangeRate> {
        Currency::ALL
            .iter()
            .map(|currency| ExchangeRate {
                currency: *currency,
                rate: self.rate(*currency),
            })
            .collect()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        RateTable {
            reference: Currency::Pln,
            // Exact decimals. Rates widened from f32 would carry a binary tail
            // (4.28 -> 4.28000020980835) and can move the last digit of a
            // truncated total.
            rates: [dec!(1), dec!(4.28), dec!(3.72), dec!(3.88)],
        }
    }
}
