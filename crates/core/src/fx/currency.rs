//! Supported currencies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::Error;

/// Currency of an account balance.
///
/// The enum carries no rate information; rates live in [`super::RateTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Pln,
    Eur,
    Usd,
    Chf,
}

impl Currency {
    pub const COUNT: usize = 4;

    /// Every supported currency, in declaration order.
    pub const ALL: [Currency; Currency::COUNT] =
        [Currency::Pln, Currency::Eur, Currency::Usd, Currency::Chf];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Pln => "PLN",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Chf => "CHF",
        }
    }

    /// Position of the variant in [`Currency::ALL`].
    pub(crate) fn index(&self) -> usize {
        match self {
            Currency::Pln => 0,
            Currency::Eur => 1,
            Currency::Usd => 2,
            Currency::Chf => 3,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PLN" => Ok(Currency::Pln),
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            "CHF" => Ok(Currency::Chf),
            _ => Err(Error::UnsupportedCurrency(s.to_string())),
        }
    }
}
