use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::Arc;

use super::fx_model::RateTable;
use crate::accounts::Account;
use crate::constants::{
    ACCOUNT_TYPE_TOTALS_PRECISION, COMPANY_TOTALS_PRECISION, REFERENCE_PRECISION,
};

/// Significant-digit rounding applied to a converted amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionPolicy {
    pub significant_digits: u32,
    pub strategy: RoundingStrategy,
}

impl ConversionPolicy {
    /// Single account conversion: 4 significant digits, half-up.
    pub const REFERENCE: ConversionPolicy = ConversionPolicy {
        significant_digits: REFERENCE_PRECISION,
        strategy: RoundingStrategy::MidpointAwayFromZero,
    };

    /// Per-account amounts inside account-type totals: 6 significant digits, truncated.
    pub const ACCOUNT_TYPE_TOTALS: ConversionPolicy = ConversionPolicy {
        significant_digits: ACCOUNT_TYPE_TOTALS_PRECISION,
        strategy: RoundingStrategy::ToZero,
    };

    /// Company-level totals: 7 significant digits, half-even.
    pub const COMPANY_TOTALS: ConversionPolicy = ConversionPolicy {
        significant_digits: COMPANY_TOTALS_PRECISION,
        strategy: RoundingStrategy::MidpointNearestEven,
    };

    pub fn apply(&self, value: Decimal) -> Decimal {
        value
            .round_sf_with_strategy(self.significant_digits, self.strategy)
            .unwrap_or(value)
    }
}

/// Converts account balances into the reference currency of a [`RateTable`].
#[derive(Debug, Clone)]
pub struct CurrencyConverter {
    rates: Arc<RateTable>,
}

impl CurrencyConverter {
    pub fn new(rates: Arc<RateTable>) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Amount times rate, without any rounding.
    pub fn convert_unrounded(&self, account: &Account) -> Decimal {
        account.amount * self.rates.rate(account.currency)
    }

    /// Converts and rounds once with `policy`.
    pub fn convert_with(&self, account: &Account, policy: ConversionPolicy) -> Decimal {
        policy.apply(self.convert_unrounded(account))
    }

    /// Converts an account balance using [`ConversionPolicy::REFERENCE`].
    pub fn convert_to_reference(&self, account: &Account) -> Decimal {
        self.convert_with(account, ConversionPolicy::REFERENCE)
    }

    /// Sum of the rounded reference amounts. Zero for no accounts.
    pub fn sum_accounts<'a, I>(&self, accounts: I) -> Decimal
    where
        I: IntoIterator<Item = &'a Account>,
    {
        accounts
            .into_iter()
            .map(|account| self.convert_to_reference(account))
            .sum()
    }

    /// Unrounded sum of the reference amounts, `None` when there is nothing to sum.
    pub fn total_cash_in_reference<'a, I>(&self, accounts: I) -> Option<Decimal>
    where
        I: IntoIterator<Item = &'a Account>,
    {
        accounts
            .into_iter()
            .map(|account| self.convert_unrounded(account))
            .reduce(|total, amount| total + amount)
    }
}

impl Default for CurrencyConverter {
    fn default() -> Self {
        Self::new(Arc::new(RateTable::default()))
    }
}
