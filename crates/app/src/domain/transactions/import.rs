//! Seed import.

use thiserror::Error;
use tracing::info;

use crate::{
    domain::transactions::{TransactionsService, TransactionsServiceError},
    feed::{FeedError, TransactionFeed},
};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to fetch seed data: {0}")]
    Feed(#[from] FeedError),

    #[error("failed to store seed data: {0}")]
    Store(#[from] TransactionsServiceError),
}

/// Replace the stored transactions with the feed's current contents.
///
/// Nothing is deleted unless the feed was fetched and decoded in full.
///
/// # Errors
///
/// Returns an error when the feed cannot be read or the store rejects the
/// batch; the previously stored transactions are kept in either case.
pub async fn import_transactions(
    feed: &dyn TransactionFeed,
    transactions: &dyn TransactionsService,
) -> Result<u64, ImportError> {
    let batch = feed.fetch().await?;

    info!(records = batch.len(), "fetched seed data");

    Ok(transactions.replace_transactions(batch).await?)
}
