use log::debug;
use rust_decimal_macros::dec;
use std::path::PathBuf;

use super::dataset_traits::DatasetProviderTrait;
use crate::accounts::{Account, AccountType};
use crate::errors::{Error, Result};
use crate::fx::Currency;
use crate::organization::{Company, Holding, Sex, User};

/// Serves a fixed list of holdings supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct StaticDatasetProvider {
    holdings: Vec<Holding>,
}

impl StaticDatasetProvider {
    pub fn new(holdings: Vec<Holding>) -> Self {
        Self { holdings }
    }
}

impl DatasetProviderTrait for StaticDatasetProvider {
    fn generate(&self) -> Result<Vec<Holding>> {
        Ok(self.holdings.clone())
    }
}

/// Reads the holdings tree from a JSON file (an array of holdings).
#[derive(Debug, Clone)]
pub struct JsonDatasetProvider {
    path: PathBuf,
}

impl JsonDatasetProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetProviderTrait for JsonDatasetProvider {
    fn generate(&self) -> Result<Vec<Holding>> {
        debug!("Loading dataset from {}", self.path.display());
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            Error::Config(format!(
                "Unable to read dataset file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        let holdings: Vec<Holding> = serde_json::from_str(&content)?;
        Ok(holdings)
    }
}

/// Built-in demo dataset: three holdings, one of them without companies.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDatasetProvider;

impl DatasetProviderTrait for MockDatasetProvider {
    fn generate(&self) -> Result<Vec<Holding>> {
        Ok(vec![nestle(), coca_cola(), Holding::new("Pepsico", Vec::new())])
    }
}

fn nestle() -> Holding {
    let polska = Company::new(
        "Nestle Polska",
        vec![
            User::new(
                "Zosia",
                "Psikuta",
                34,
                Sex::Woman,
                vec![
                    Account::new("PL-001", dec!(1000.00), Currency::Pln, AccountType::Ror),
                    Account::new("PL-002", dec!(200.00), Currency::Eur, AccountType::Savings),
                ],
            ),
            User::new(
                "Zenon",
                "Kucowski",
                45,
                Sex::Man,
                vec![Account::new(
                    "PL-003",
                    dec!(500.00),
                    Currency::Usd,
                    AccountType::Ror,
                )],
            ),
            User::new(
                "Alfred",
                "Pasibrzuch",
                27,
                Sex::Man,
                vec![Account::new(
                    "PL-004",
                    dec!(30.50),
                    Currency::Pln,
                    AccountType::Personal,
                )],
            ),
        ],
    );

    let gerber = Company::new(
        "Gerber",
        vec![
            User::new(
                "Anna",
                "Kowalska",
                52,
                Sex::Woman,
                vec![
                    Account::new("PL-005", dec!(120.00), Currency::Chf, AccountType::Lo),
                    Account::new("PL-006", dec!(80.00), Currency::Pln, AccountType::Ror),
                ],
            ),
            User::new(
                "Kim",
                "Lis",
                30,
                Sex::Other,
                vec![Account::new(
                    "PL-007",
                    dec!(60.00),
                    Currency::Eur,
                    AccountType::Ror,
                )],
            ),
        ],
    );

    Holding::new("Nestle", vec![polska, gerber])
}

fn coca_cola() -> Holding {
    let poland = Company::new(
        "Coca-Cola Poland",
        vec![
            User::new(
                "Adam",
                "Wojcik",
                61,
                Sex::Man,
                vec![
                    Account::new("PL-008", dec!(2500.00), Currency::Pln, AccountType::Savings),
                    Account::new("PL-009", dec!(10.00), Currency::Usd, AccountType::Rb),
                ],
            ),
            User::new("Zenek", "Jawowy", 19, Sex::Man, Vec::new()),
            User::new(
                "Ewa",
                "Nowak",
                41,
                Sex::Woman,
                vec![Account::new(
                    "PL-010",
                    dec!(700.00),
                    Currency::Usd,
                    AccountType::Ror,
                )],
            ),
        ],
    );

    let fanta = Company::new(
        "Fanta",
        vec![User::new(
            "Anna",
            "Zielinska",
            23,
            Sex::Woman,
            vec![Account::new(
                "PL-011",
                dec!(15.00),
                Currency::Eur,
                AccountType::Ro,
            )],
        )],
    );

    Holding::new("Coca-Cola", vec![poland, fanta])
}
