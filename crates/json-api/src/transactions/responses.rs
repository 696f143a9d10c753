//! Response bodies for the product transaction endpoints.

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use salesboard_app::domain::transactions::models::{
    CategoryCount, PriceRangeCount, SalesSummary, TransactionRecord,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransactionResponse {
    /// Identifier assigned by the seed feed; not unique
    pub id: i64,

    pub title: String,

    pub description: String,

    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    pub category: String,

    /// RFC 3339 timestamp of the sale
    #[salvo(schema(value_type = String))]
    pub date_of_sale: Timestamp,

    pub image: String,

    pub sold: bool,
}

impl From<TransactionRecord> for TransactionResponse {
    fn from(record: TransactionRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            price: record.price,
            category: record.category,
            date_of_sale: record.date_of_sale,
            image: record.image,
            sold: record.sold,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TransactionsResponse {
    /// The requested page of transactions
    pub transactions: Vec<TransactionResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SalesSummaryResponse {
    /// Sum of prices of every sale in the month, sold or not
    #[salvo(schema(value_type = f64))]
    pub total_sales_amount: Decimal,

    pub total_sold_items: u64,

    pub total_not_sold_items: u64,
}

impl From<SalesSummary> for SalesSummaryResponse {
    fn from(summary: SalesSummary) -> Self {
        Self {
            total_sales_amount: summary.total_sales_amount,
            total_sold_items: summary.total_sold_items,
            total_not_sold_items: summary.total_not_sold_items,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryCountResponse {
    pub category: String,
    pub count: u64,
}

impl From<CategoryCount> for CategoryCountResponse {
    fn from(count: CategoryCount) -> Self {
        Self {
            category: count.category,
            count: count.count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PriceRangeResponse {
    /// Bucket label such as `101-200` or `901-Infinity`
    pub range: String,
    pub count: u64,
}

impl From<PriceRangeCount> for PriceRangeResponse {
    fn from(count: PriceRangeCount) -> Self {
        Self {
            range: count.range,
            count: count.count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ImportResponse {
    pub message: String,

    /// Number of records now stored
    pub imported: u64,
}
