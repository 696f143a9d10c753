//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::transactions::{
        PgTransactionsService, TransactionsService,
        import::{self, ImportError},
    },
    feed::{HttpTransactionFeed, TransactionFeed},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub transactions: Arc<dyn TransactionsService>,
    pub feed: Arc<dyn TransactionFeed>,
}

impl AppContext {
    /// Build application context from a database URL and seed source URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or applying
    /// migrations fails.
    pub async fn from_database_url(
        url: &str,
        seed_source_url: &str,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        Ok(Self {
            transactions: Arc::new(PgTransactionsService::new(Db::new(pool))),
            feed: Arc::new(HttpTransactionFeed::new(seed_source_url)),
        })
    }

    /// Replace stored transactions with the seed feed's contents.
    ///
    /// # Errors
    ///
    /// Returns an error when fetching or storing the seed data fails.
    pub async fn import_transactions(&self) -> Result<u64, ImportError> {
        import::import_transactions(self.feed.as_ref(), self.transactions.as_ref()).await
    }
}
