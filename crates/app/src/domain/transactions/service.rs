//! Transactions service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::transactions::{
        errors::TransactionsServiceError,
        models::{CategoryCount, NewTransaction, PriceRangeCount, SalesSummary, TransactionRecord},
        query::{MonthWindow, SaleMonth, TransactionQuery},
        repository::PgTransactionsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgTransactionsService {
    db: Db,
    repository: PgTransactionsRepository,
}

impl PgTransactionsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgTransactionsRepository::new(),
        }
    }
}

#[async_trait]
impl TransactionsService for PgTransactionsService {
    async fn list_transactions(
        &self,
        query: TransactionQuery,
    ) -> Result<Vec<TransactionRecord>, TransactionsServiceError> {
        let mut tx = self.db.begin().await?;

        let transactions = self.repository.list_transactions(&mut tx, &query).await?;

        tx.commit().await?;

        Ok(transactions)
    }

    async fn sales_summary(
        &self,
        window: MonthWindow,
    ) -> Result<SalesSummary, TransactionsServiceError> {
        let mut tx = self.db.begin().await?;

        let summary = self.repository.sales_summary(&mut tx, window).await?;

        tx.commit().await?;

        Ok(summary)
    }

    async fn category_breakdown(
        &self,
        month: SaleMonth,
    ) -> Result<Vec<CategoryCount>, TransactionsServiceError> {
        let mut tx = self.db.begin().await?;

        let categories = self.repository.category_breakdown(&mut tx, month).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn price_histogram(
        &self,
        month: SaleMonth,
    ) -> Result<Vec<PriceRangeCount>, TransactionsServiceError> {
        let mut tx = self.db.begin().await?;

        let ranges = self.repository.price_histogram(&mut tx, month).await?;

        tx.commit().await?;

        Ok(ranges)
    }

    async fn replace_transactions(
        &self,
        transactions: Vec<NewTransaction>,
    ) -> Result<u64, TransactionsServiceError> {
        for transaction in &transactions {
            transaction.validate()?;
        }

        let mut tx = self.db.begin().await?;

        let deleted = self.repository.delete_transactions(&mut tx).await?;
        let inserted = self
            .repository
            .insert_transactions(&mut tx, &transactions)
            .await?;

        tx.commit().await?;

        info!(deleted, inserted, "replaced product transactions");

        Ok(inserted)
    }
}

#[automock]
#[async_trait]
pub trait TransactionsService: Send + Sync {
    /// Retrieves one page of transactions, optionally filtered by search text.
    async fn list_transactions(
        &self,
        query: TransactionQuery,
    ) -> Result<Vec<TransactionRecord>, TransactionsServiceError>;

    /// Totals for every sale inside the window.
    async fn sales_summary(
        &self,
        window: MonthWindow,
    ) -> Result<SalesSummary, TransactionsServiceError>;

    /// Per-category counts for sales in the given month of any year, sorted
    /// by category.
    async fn category_breakdown(
        &self,
        month: SaleMonth,
    ) -> Result<Vec<CategoryCount>, TransactionsServiceError>;

    /// Per-bucket price counts for sales in the given month of any year.
    /// Empty buckets are omitted.
    async fn price_histogram(
        &self,
        month: SaleMonth,
    ) -> Result<Vec<PriceRangeCount>, TransactionsServiceError>;

    /// Atomically replaces every stored transaction with `transactions`,
    /// returning the number inserted.
    async fn replace_transactions(
        &self,
        transactions: Vec<NewTransaction>,
    ) -> Result<u64, TransactionsServiceError>;
}
