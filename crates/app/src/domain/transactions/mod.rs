//! Product Transactions

pub mod buckets;
pub mod errors;
pub mod import;
pub mod models;
pub mod query;
mod repository;
pub mod service;

pub use errors::TransactionsServiceError;
pub use service::*;
