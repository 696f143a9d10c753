//! Transactions Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, QueryBuilder, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::transactions::{
    buckets::PRICE_BUCKETS,
    models::{CategoryCount, NewTransaction, PriceRangeCount, SalesSummary, TransactionRecord},
    query::{MonthWindow, SaleMonth, TransactionQuery},
};

const LIST_TRANSACTIONS_SQL: &str = include_str!("sql/list_transactions.sql");
const SALES_SUMMARY_SQL: &str = include_str!("sql/sales_summary.sql");
const CATEGORY_BREAKDOWN_SQL: &str = include_str!("sql/category_breakdown.sql");
const DELETE_TRANSACTIONS_SQL: &str = include_str!("sql/delete_transactions.sql");

const INSERT_TRANSACTIONS_SQL: &str = "INSERT INTO product_transactions \
    (uuid, id, title, description, price, category, date_of_sale, image, sold) ";

/// Rows per `INSERT`, keeping bind parameters well under the Postgres limit.
const INSERT_CHUNK_SIZE: usize = 1_000;

#[derive(Debug, Clone, Default)]
pub(crate) struct PgTransactionsRepository;

impl PgTransactionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_transactions(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        transaction_query: &TransactionQuery,
    ) -> Result<Vec<TransactionRecord>, sqlx::Error> {
        query_as::<Postgres, TransactionRecord>(LIST_TRANSACTIONS_SQL)
            .bind(transaction_query.search_pattern())
            .bind(i64::from(transaction_query.limit().get()))
            .bind(transaction_query.offset())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn sales_summary(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        window: MonthWindow,
    ) -> Result<SalesSummary, sqlx::Error> {
        query_as::<Postgres, SalesSummary>(SALES_SUMMARY_SQL)
            .bind(SqlxTimestamp::from(window.start()))
            .bind(SqlxTimestamp::from(window.end()))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn category_breakdown(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        month: SaleMonth,
    ) -> Result<Vec<CategoryCount>, sqlx::Error> {
        query_as::<Postgres, CategoryCount>(CATEGORY_BREAKDOWN_SQL)
            .bind(month.number())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn price_histogram(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        month: SaleMonth,
    ) -> Result<Vec<PriceRangeCount>, sqlx::Error> {
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT price_range, COUNT(*) AS count FROM (SELECT ",
        );

        push_price_range(&mut builder);

        builder
            .push(
                " AS price_range FROM product_transactions \
                 WHERE EXTRACT(MONTH FROM date_of_sale AT TIME ZONE 'UTC')::integer = ",
            )
            .push_bind(month.number())
            .push(") AS bucketed GROUP BY price_range ORDER BY price_range COLLATE \"C\"");

        builder
            .build_query_as::<PriceRangeCount>()
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn delete_transactions(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_TRANSACTIONS_SQL)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn insert_transactions(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        transactions: &[NewTransaction],
    ) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;

        for chunk in transactions.chunks(INSERT_CHUNK_SIZE) {
            let mut builder = QueryBuilder::<Postgres>::new(INSERT_TRANSACTIONS_SQL);

            builder.push_values(chunk, |mut row, transaction| {
                row.push_bind(Uuid::now_v7())
                    .push_bind(transaction.id)
                    .push_bind(transaction.title.clone())
                    .push_bind(transaction.description.clone())
                    .push_bind(transaction.price)
                    .push_bind(transaction.category.clone())
                    .push_bind(SqlxTimestamp::from(transaction.date_of_sale))
                    .push_bind(transaction.image.clone())
                    .push_bind(transaction.sold);
            });

            inserted += builder.build().execute(&mut **tx).await?.rows_affected();
        }

        Ok(inserted)
    }
}

/// Render the `CASE` expression that labels a row's `price` with its bucket.
fn push_price_range(builder: &mut QueryBuilder<'_, Postgres>) {
    builder.push("CASE");

    for bucket in PRICE_BUCKETS {
        match bucket.max {
            Some(max) => {
                builder
                    .push(" WHEN price <= ")
                    .push_bind(Decimal::from(max))
                    .push(" THEN ")
                    .push_bind(bucket.to_string());
            }
            None => {
                builder.push(" ELSE ").push_bind(bucket.to_string());
            }
        }
    }

    builder.push(" END");
}

fn try_get_count(row: &PgRow, column: &str) -> sqlx::Result<u64> {
    let count: i64 = row.try_get(column)?;

    u64::try_from(count).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for TransactionRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            category: row.try_get("category")?,
            date_of_sale: row.try_get::<SqlxTimestamp, _>("date_of_sale")?.to_jiff(),
            image: row.try_get("image")?,
            sold: row.try_get("sold")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for SalesSummary {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            total_sales_amount: row.try_get("total_sales_amount")?,
            total_sold_items: try_get_count(row, "total_sold_items")?,
            total_not_sold_items: try_get_count(row, "total_not_sold_items")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for CategoryCount {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            category: row.try_get("category")?,
            count: try_get_count(row, "count")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for PriceRangeCount {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            range: row.try_get("price_range")?,
            count: try_get_count(row, "count")?,
        })
    }
}
