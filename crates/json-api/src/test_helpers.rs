//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use salesboard_app::{
    context::AppContext,
    domain::transactions::{MockTransactionsService, models::TransactionRecord},
    feed::MockTransactionFeed,
};

use crate::state::State;

fn strict_feed_mock() -> MockTransactionFeed {
    let mut feed = MockTransactionFeed::new();

    feed.expect_fetch().never();

    feed
}

pub(crate) fn state_with(
    transactions: MockTransactionsService,
    feed: MockTransactionFeed,
) -> Arc<State> {
    State::shared(AppContext {
        transactions: Arc::new(transactions),
        feed: Arc::new(feed),
    })
}

pub(crate) fn transactions_service(
    transactions: MockTransactionsService,
    route: Router,
) -> Service {
    import_service(transactions, strict_feed_mock(), route)
}

pub(crate) fn import_service(
    transactions: MockTransactionsService,
    feed: MockTransactionFeed,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(transactions, feed)))
            .push(route),
    )
}

pub(crate) fn make_record(id: i64, price: i64, sold: bool) -> TransactionRecord {
    TransactionRecord {
        uuid: Uuid::now_v7(),
        id,
        title: format!("Product {id}"),
        description: format!("Description of product {id}"),
        price: Decimal::from(price),
        category: "electronics".to_string(),
        date_of_sale: Timestamp::UNIX_EPOCH,
        image: String::new(),
        sold,
    }
}
