use log::debug;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap, HashSet, LinkedList};
use std::fmt::Display;
use std::hash::Hash;
use std::sync::Arc;

use crate::accounts::Account;
use crate::dataset::Dataset;
use crate::errors::{Error, Result};
use crate::fx::{Currency, CurrencyConverter, RateTable};
use crate::organization::{is_man, is_woman, Company, User};

/// Read-only queries over one dataset snapshot.
///
/// Nothing here mutates the dataset; a failed query leaves the snapshot
/// usable for the next one. Aggregations that need currency conversion live
/// in `aggregation_service.rs`.
pub struct QueryService {
    pub(super) dataset: Arc<Dataset>,
    pub(super) converter: CurrencyConverter,
}

impl QueryService {
    pub fn new(dataset: Arc<Dataset>, rates: Arc<RateTable>) -> Self {
        Self {
            dataset,
            converter: CurrencyConverter::new(rates),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn converter(&self) -> &CurrencyConverter {
        &self.converter
    }

    // ------------------------------------------------------------------
    // Counting
    // ------------------------------------------------------------------

    /// Number of holdings owning at least one company.
    pub fn holdings_with_companies_count(&self) -> usize {
        self.dataset
            .holdings()
            .iter()
            .filter(|holding| !holding.companies.is_empty())
            .count()
    }

    pub fn companies_count(&self) -> usize {
        self.dataset
            .holdings()
            .iter()
            .map(|holding| holding.companies.len())
            .sum()
    }

    pub fn users_count(&self) -> usize {
        self.dataset
            .companies()
            .map(|company| company.users.len())
            .sum()
    }

    pub fn accounts_count(&self) -> usize {
        self.dataset
            .users()
            .map(|user| user.accounts.len())
            .sum()
    }

    pub fn women_count(&self) -> usize {
        self.dataset.users().filter(|user| is_woman(user)).count()
    }

    /// Sum of every user's age squared.
    pub fn age_squares_sum(&self) -> u64 {
        self.dataset
            .users()
            .map(|user| u64::from(user.age).pow(2))
            .sum()
    }

    // ------------------------------------------------------------------
    // Projections
    // ------------------------------------------------------------------

    /// Holding names in lower case, in dataset order.
    pub fn holding_names(&self) -> Vec<String> {
        self.dataset
            .holdings()
            .iter()
            .map(|holding| holding.name.to_lowercase())
            .collect()
    }

    /// Sorted holding names, e.g. `(Coca-Cola, Nestle, Pepsico)`.
    pub fn holding_names_as_string(&self) -> String {
        let mut names: Vec<&str> = self
            .dataset
            .holdings()
            .iter()
            .map(|holding| holding.name.as_str())
            .collect();
        names.sort_unstable();
        format!("({})", names.join(", "))
    }

    pub fn company_names(&self) -> Vec<String> {
        self.dataset
            .companies()
            .map(|company| company.name.clone())
            .collect()
    }

    pub fn company_names_linked(&self) -> LinkedList<String> {
        self.dataset
            .companies()
            .map(|company| company.name.clone())
            .collect()
    }

    /// Company names joined with `+`, in dataset order.
    pub fn company_names_as_string(&self) -> String {
        self.company_names().join("+")
    }

    /// Same output as [`Self::company_names_as_string`], built with a single
    /// growing buffer instead of an intermediate vector.
    pub fn company_names_as_string_folded(&self) -> String {
        self.dataset
            .companies()
            .enumerate()
            .fold(String::new(), |mut buffer, (position, company)| {
                if position > 0 {
                    buffer.push('+');
                }
                buffer.push_str(&company.name);
                buffer
            })
    }

    /// Names of the first `n` companies in traversal order.
    pub fn first_n_company_names(&self, n: usize) -> HashSet<String> {
        self.dataset
            .companies()
            .take(n)
            .map(|company| company.name.clone())
            .collect()
    }

    /// Distinct currencies held on any account, sorted by name and joined with `, `.
    pub fn currencies_as_string(&self) -> String {
        let currencies: BTreeSet<&str> = self
            .dataset
            .accounts()
            .map(|account| account.currency.as_str())
            .collect();
        currencies.into_iter().collect::<Vec<_>>().join(", ")
    }

    /// Every supported currency, sorted by name and joined with `, `.
    pub fn supported_currencies_as_string(&self) -> String {
        let currencies: BTreeSet<&str> = Currency::ALL
            .iter()
            .map(|currency| currency.as_str())
            .collect();
        currencies.into_iter().collect::<Vec<_>>().join(", ")
    }

    pub fn first_names_matching<P>(&self, predicate: P) -> HashSet<String>
    where
        P: Fn(&User) -> bool,
    {
        self.dataset
            .users()
            .filter(|user| predicate(user))
            .map(|user| user.first_name.clone())
            .collect()
    }

    /// First names of users older than `age`, men excluded, in dataset order.
    pub fn old_women_first_names(&self, age: u32) -> Vec<String> {
        self.dataset
            .users()
            .filter(|user| user.age > age)
            .filter(|user| !is_man(user))
            .inspect(|user| debug!("Older than {}: {:?}", age, user))
            .map(|user| user.first_name.clone())
            .collect()
    }

    /// Distinct first names, sorted and separated by a single space.
    pub fn user_first_names_as_string(&self) -> String {
        let names: BTreeSet<&str> = self
            .dataset
            .users()
            .map(|user| user.first_name.as_str())
            .collect();
        names.into_iter().collect::<Vec<_>>().join(" ")
    }

    /// `First Last` of every user, sorted from Z to A.
    pub fn users_descending(&self) -> Vec<String> {
        let mut names: Vec<String> = self.dataset.users().map(User::full_name).collect();
        names.sort_unstable_by(|a, b| b.cmp(a));
        names
    }

    /// `"First Last is N years old"`, or `"No user"` when there is none.
    pub fn adult_status(&self, user: Option<&User>) -> String {
        user.map(|u| format!("{} is {} years old", u.full_name(), u.age))
            .unwrap_or_else(|| "No user".to_string())
    }

    pub fn for_each_company<F>(&self, mut action: F)
    where
        F: FnMut(&Company),
    {
        self.dataset.companies().for_each(|company| action(company));
    }

    // ------------------------------------------------------------------
    // Grouping
    // ------------------------------------------------------------------

    /// Last names partitioned by sex: `true` holds women, `false` men.
    ///
    /// Users of `Sex::Other` are left out. Both keys are always present.
    pub fn users_by_sex(&self) -> HashMap<bool, HashSet<String>> {
        let mut partition = HashMap::from([(true, HashSet::new()), (false, HashSet::new())]);
        for user in self
            .dataset
            .users()
            .filter(|user| is_woman(user) || is_man(user))
        {
            partition
                .entry(is_woman(user))
                .or_default()
                .insert(user.last_name.clone());
        }
        partition
    }

    // ------------------------------------------------------------------
    // Lookup tables
    // ------------------------------------------------------------------

    pub fn users_per_company(&self) -> Result<HashMap<String, Vec<User>>> {
        self.users_per_company_with(User::clone)
    }

    /// Company name to `First Last` of its users.
    pub fn users_per_company_as_string(&self) -> Result<HashMap<String, Vec<String>>> {
        self.users_per_company_with(User::full_name)
    }

    /// Company name to its users mapped through `converter`.
    ///
    /// Fails with [`Error::DuplicateKey`] if two companies share a name.
    pub fn users_per_company_with<T, F>(&self, converter: F) -> Result<HashMap<String, Vec<T>>>
    where
        F: Fn(&User) -> T,
    {
        collect_unique(
            "company",
            self.dataset.companies().map(|company| {
                (
                    company.name.clone(),
                    company.users.iter().map(&converter).collect(),
                )
            }),
        )
    }

    /// Account number to account. Fails with [`Error::DuplicateKey`] on a repeated number.
    pub fn accounts_by_number(&self) -> Result<HashMap<String, Account>> {
        collect_unique(
            "account number",
            self.dataset
                .accounts()
                .map(|account| (account.number.clone(), account.clone())),
        )
    }

    // ------------------------------------------------------------------
    // Single-result lookups
    // ------------------------------------------------------------------

    /// First user matching `predicate`, if any.
    pub fn find_user<P>(&self, predicate: P) -> Option<User>
    where
        P: Fn(&User) -> bool,
    {
        self.dataset.users().find(|user| predicate(user)).cloned()
    }

    /// First user matching `predicate`; [`Error::NotFound`] when none does.
    pub fn get_user<P>(&self, predicate: P) -> Result<User>
    where
        P: Fn(&User) -> bool,
    {
        self.find_user(predicate)
            .ok_or_else(|| Error::NotFound("no user matches the given predicate".to_string()))
    }
}

fn collect_unique<K, V, I>(kind: &str, entries: I) -> Result<HashMap<K, V>>
where
    K: Eq + Hash + Display,
    I: IntoIterator<Item = (K, V)>,
{
    let mut table = HashMap::new();
    for (key, value) in entries {
        match table.entry(key) {
            Entry::Occupied(existing) => {
                return Err(Error::DuplicateKey(format!("{} '{}'", kind, existing.key())));
            }
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
    Ok(table)
}
