//! Transaction Models

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::transactions::errors::InvalidTransaction;

/// Transaction Record
///
/// A single product sale as held by the record store. `uuid` is the store's
/// own key; `id` is the identifier carried over from the seed feed and is
/// not guaranteed to be unique.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub uuid: Uuid,
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub date_of_sale: Timestamp,
    pub image: String,
    pub sold: bool,
}

/// New Transaction
///
/// A sale record as delivered by the seed feed, prior to storage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub date_of_sale: Timestamp,
    #[serde(default)]
    pub image: String,
    pub sold: bool,
}

impl NewTransaction {
    /// Check the record invariants that the store also enforces.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending field.
    pub fn validate(&self) -> Result<(), InvalidTransaction> {
        let required = [
            ("title", &self.title),
            ("description", &self.description),
            ("category", &self.category),
        ];

        if let Some(&(field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(InvalidTransaction::EmptyField { id: self.id, field });
        }

        if self.price < Decimal::ZERO {
            return Err(InvalidTransaction::NegativePrice {
                id: self.id,
                price: self.price,
            });
        }

        Ok(())
    }
}

/// Monthly sales totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesSummary {
    /// Sum of `price` over every record in the window, sold or not
    pub total_sales_amount: Decimal,
    pub total_sold_items: u64,
    pub total_not_sold_items: u64,
}

/// Number of records sharing a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Number of records falling in a price bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRangeCount {
    pub range: String,
    pub count: u64,
}
