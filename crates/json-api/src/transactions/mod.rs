//! Product Transactions

mod handlers;
mod responses;

pub(crate) use handlers::*;
