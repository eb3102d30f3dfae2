//! Account domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::Error;
use crate::fx::Currency;

/// Classification of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// Current account
    Ror,
    /// Deposit account
    Lo,
    /// Foreign currency account
    Ro,
    /// Brokerage account
    Rb,
    Savings,
    Personal,
}

impl AccountType {
    pub const ALL: [AccountType; 6] = [
        AccountType::Ror,
        AccountType::Lo,
        AccountType::Ro,
        AccountType::Rb,
        AccountType::Savings,
        AccountType::Personal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Ror => "ROR",
            AccountType::Lo => "LO",
            AccountType::Ro => "RO",
            AccountType::Rb => "RB",
            AccountType::Savings => "SAVINGS",
            AccountType::Personal => "PERSONAL",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        AccountType::ALL
            .iter()
            .find(|account_type| account_type.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| Error::UnsupportedAccountType(s.to_string()))
    }
}

/// A financial account owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account number, unique across the dataset
    pub number: String,
    pub amount: Decimal,
    pub currency: Currency,
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

impl Account {
    pub fn new(
        number: impl Into<String>,
        amount: Decimal,
        currency: Currency,
        account_type: AccountType,
    ) -> Self {
        Account {
            number: number.into(),
            amount,
            currency,
            account_type,
        }
    }
}
