//! Salesboard Domain Concerns

pub mod transactions;
