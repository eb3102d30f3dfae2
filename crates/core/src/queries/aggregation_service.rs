//! Aggregations that rank, count categories, sample or convert balances.

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};

use super::queries_service::QueryService;
use crate::accounts::AccountType;
use crate::constants::USER_CAP;
use crate::errors::{Error, Result};
use crate::fx::ConversionPolicy;
use crate::organization::{is_man, is_woman, Company, Sex, User};

impl QueryService {
    /// Total of a user's accounts in the reference currency, each account
    /// rounded with [`ConversionPolicy::REFERENCE`].
    pub fn user_total_in_reference(&self, user: &User) -> Decimal {
        self.converter.sum_accounts(&user.accounts)
    }

    /// The woman with the largest converted balance.
    ///
    /// On a tie the first one in traversal order wins; callers should not
    /// depend on which of the tied users is returned.
    pub fn richest_woman(&self) -> Option<User> {
        self.dataset
            .users()
            .filter(|user| is_woman(user))
            .map(|user| (user, self.user_total_in_reference(user)))
            .reduce(|best, candidate| {
                if candidate.1 > best.1 {
                    candidate
                } else {
                    best
                }
            })
            .map(|(user, total)| {
                debug!("Richest woman: {} with {}", user.full_name(), total);
                user.clone()
            })
    }

    /// Account type held by the most accounts.
    ///
    /// Fails with [`Error::InvalidState`] when the dataset has no accounts.
    /// Equal counts resolve to the type declared first in [`AccountType`].
    pub fn most_popular_account_type(&self) -> Result<AccountType> {
        let mut counts: HashMap<AccountType, usize> = HashMap::new();
        for account in self.dataset.accounts() {
            *counts.entry(account.account_type).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .max_by(|(type_a, count_a), (type_b, count_b)| {
                count_a.cmp(count_b).then_with(|| type_b.cmp(type_a))
            })
            .map(|(account_type, _)| account_type)
            .ok_or_else(|| {
                Error::InvalidState("no accounts to pick a most popular type from".to_string())
            })
    }

    /// Converted balance per account type.
    ///
    /// Each account is truncated to six significant digits before summing.
    pub fn money_on_accounts(&self) -> HashMap<AccountType, Decimal> {
        let mut totals: HashMap<AccountType, Decimal> = HashMap::new();
        for account in self.dataset.accounts() {
            let amount = self
                .converter
                .convert_with(account, ConversionPolicy::ACCOUNT_TYPE_TOTALS);
            *totals.entry(account.account_type).or_insert(Decimal::ZERO) += amount;
        }
        totals
    }

    /// For each account type, every man holding such an account mapped to his
    /// converted balance on accounts of that type.
    pub fn men_balances_by_account_type(&self) -> HashMap<AccountType, HashMap<User, Decimal>> {
        let mut balances: HashMap<AccountType, HashMap<User, Decimal>> = HashMap::new();
        for user in self.dataset.users().filter(|user| is_man(user)) {
            for account in &user.accounts {
                let amount = self.converter.convert_to_reference(account);
                *balances
                    .entry(account.account_type)
                    .or_default()
                    .entry(user.clone())
                    .or_insert(Decimal::ZERO) += amount;
            }
        }
        balances
    }

    /// Converted balance of a company's users who are neither men nor women,
    /// rounded to seven significant digits.
    pub fn other_sex_money(&self, company: &Company) -> Decimal {
        let total: Decimal = company
            .users
            .iter()
            .filter(|user| user.sex == Sex::Other)
            .map(|user| self.user_total_in_reference(user))
            .sum();
        ConversionPolicy::COMPANY_TOTALS.apply(total)
    }

    /// Up to ten users, the first ones in traversal order.
    pub fn users_capped(&self) -> HashSet<User> {
        self.dataset.users().take(USER_CAP).cloned().collect()
    }

    /// `n` distinct users picked at random.
    ///
    /// Fails with [`Error::BoundsViolation`] when `n` exceeds the number of
    /// distinct users.
    pub fn random_users(&self, n: usize) -> Result<Vec<User>> {
        self.random_users_with(n, &mut rand::thread_rng())
    }

    pub fn random_users_with<R>(&self, n: usize, rng: &mut R) -> Result<Vec<User>>
    where
        R: Rng + ?Sized,
    {
        let mut seen: HashSet<&User> = HashSet::new();
        let population: Vec<&User> = self
            .dataset
            .users()
            .filter(|user| seen.insert(*user))
            .collect();

        if n > population.len() {
            warn!(
                "Requested {} random users but only {} are available",
                n,
                population.len()
            );
            return Err(Error::BoundsViolation {
                requested: n,
                available: population.len(),
            });
        }

        Ok(population
            .choose_multiple(rng, n)
            .map(|user| (*user).clone())
            .collect())
    }
}
