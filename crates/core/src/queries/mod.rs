//! Queries module - read-only queries and aggregations over a dataset snapshot.

mod aggregation_service;
mod queries_service;

pub use queries_service::QueryService;

#[cfg(test)]
mod queries_service_tests;
