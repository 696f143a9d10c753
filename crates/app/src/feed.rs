//! Seed feed client for product transactions.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::domain::transactions::models::NewTransaction;

/// Location of the published seed data.
pub const DEFAULT_SEED_SOURCE_URL: &str =
    "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

/// Errors from fetching or decoding the seed feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("seed request failed with status {status}: {body}")]
    UnexpectedResponse { status: StatusCode, body: String },

    #[error("malformed seed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Source of the full set of transactions to import.
#[automock]
#[async_trait]
pub trait TransactionFeed: Send + Sync {
    /// Fetch every transaction published by the feed.
    async fn fetch(&self) -> Result<Vec<NewTransaction>, FeedError>;
}

/// HTTP client for a JSON array of transactions.
#[derive(Debug, Clone)]
pub struct HttpTransactionFeed {
    url: String,
    http: Client,
}

impl HttpTransactionFeed {
    /// Create a feed reading from `url`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl TransactionFeed for HttpTransactionFeed {
    async fn fetch(&self) -> Result<Vec<NewTransaction>, FeedError> {
        let response = self.http.get(&self.url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            return Err(FeedError::UnexpectedResponse { status, body });
        }

        let payload = response.bytes().await?;

        parse_payload(&payload)
    }
}

fn parse_payload(payload: &[u8]) -> Result<Vec<NewTransaction>, FeedError> {
    Ok(serde_json::from_slice(payload)?)
}
