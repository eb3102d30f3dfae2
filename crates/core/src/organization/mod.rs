//! Organization module - holdings, companies and users.

mod organization_model;

pub use organization_model::{is_man, is_woman, Company, Holding, Sex, User};
