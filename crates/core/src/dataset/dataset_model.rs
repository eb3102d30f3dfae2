use crate::accounts::Account;
use crate::organization::{Company, Holding, User};

/// Immutable snapshot of the holdings tree.
///
/// The traversal methods build a fresh iterator on every call and always walk
/// the tree in holding order, then company, user and account order. Every
/// query that promises a deterministic output order relies on this.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    holdings: Vec<Holding>,
}

impl Dataset {
    pub fn new(holdings: Vec<Holding>) -> Self {
        Self { holdings }
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn companies(&self) -> impl Iterator<Item = &Company> + '_ {
        self.holdings
            .iter()
            .flat_map(|holding| holding.companies.iter())
    }

    pub fn users(&self) -> impl Iterator<Item = &User> + '_ {
        self.companies().flat_map(|company| company.users.iter())
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> + '_ {
        self.users().flat_map(|user| user.accounts.iter())
    }
}

impl From<Vec<Holding>> for Dataset {
    fn from(holdings: Vec<Holding>) -> Self {
        Self::new(holdings)
    }
}
