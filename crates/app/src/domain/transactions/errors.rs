//! Transactions service errors.

use rust_decimal::Decimal;
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransactionsServiceError {
    #[error("invalid transaction: {0}")]
    Invalid(#[from] InvalidTransaction),

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for TransactionsServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

/// A feed record that breaks the record invariants.
#[derive(Debug, Error)]
pub enum InvalidTransaction {
    #[error("transaction {id} has an empty `{field}`")]
    EmptyField { id: i64, field: &'static str },

    #[error("transaction {id} has a negative price ({price})")]
    NegativePrice { id: i64, price: Decimal },
}

/// A `date` query value that is not a calendar date in `YYYY-MM-DD` form.
#[derive(Debug, Error)]
pub enum InvalidSaleDate {
    #[error("sale date must have the form YYYY-MM-DD")]
    Shape,

    #[error("invalid sale date: {0}")]
    Date(#[from] jiff::Error),
}

/// Pagination values outside their accepted range.
#[derive(Debug, Error)]
pub enum InvalidPagination {
    #[error("page must be a positive integer")]
    Page,

    #[error("limit must be a positive integer")]
    Limit,
}
