//! Workshop Core - domain entities, traversal and queries.
//!
//! This crate holds an immutable holdings → companies → users → accounts tree
//! and a set of read-only queries over it: counting, projections, grouping,
//! lookup tables, ranking, sampling and currency conversion into PLN.

pub mod accounts;
pub mod constants;
pub mod dataset;
pub mod errors;
pub mod export;
pub mod fx;
pub mod organization;
pub mod queries;
pub mod settings;

// Re-export the entities every caller needs
pub use accounts::{Account, AccountType};
pub use organization::{Company, Holding, Sex, User};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
