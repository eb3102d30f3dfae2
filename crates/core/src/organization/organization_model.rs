//! Organization domain models.
//!
//! The entities form a strict ownership tree: a holding owns its companies,
//! a company owns its users and a user owns its accounts.

use serde::{Deserialize, Serialize};

use crate::accounts::Account;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    Man,
    Woman,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub sex: Sex,
    #[serde(default)]
    pub accounts: Vec<Account>,
}

impl User {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        sex: Sex,
        accounts: Vec<Account>,
    ) -> Self {
        User {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            sex,
            accounts,
        }
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Company {
    pub fn new(name: impl Into<String>, users: Vec<User>) -> Self {
        Company {
            name: name.into(),
            users,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub name: String,
    #[serde(default)]
    pub companies: Vec<Company>,
}

impl Holding {
    pub fn new(name: impl Into<String>, companies: Vec<Company>) -> Self {
        Holding {
            name: name.into(),
            companies,
        }
    }
}

pub fn is_woman(user: &User) -> bool {
    user.sex == Sex::Woman
}

pub fn is_man(user: &User) -> bool {
    user.sex == Sex::Man
}
