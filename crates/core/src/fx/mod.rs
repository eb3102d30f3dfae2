//! FX (Foreign Exchange) module - currencies, the rate table and conversion policies.

pub mod currency;
pub mod currency_converter;
mod fx_model;

pub use currency::Currency;
pub use currency_converter::{ConversionPolicy, CurrencyConverter};
pub use fx_model::{ExchangeRate, RateTable};
