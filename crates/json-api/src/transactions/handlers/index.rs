//! Transaction Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use salesboard_app::domain::transactions::query::TransactionQuery;

use crate::{
    errors::ApiError, extensions::*, state::State, transactions::responses::TransactionsResponse,
};

fn parse_positive(value: Option<String>, message: &str) -> Result<Option<u32>, ApiError> {
    value
        .map(|value| value.trim().parse::<u32>())
        .transpose()
        .or_400(message)
}

/// Transaction Index Handler
///
/// Returns one page of transactions whose title or description contains
/// `search`, in storage order.
#[endpoint(tags("transactions"), summary = "List Transactions")]
pub(crate) async fn handler(
    search: QueryParam<String, false>,
    page: QueryParam<String, false>,
    limit: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<TransactionsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let query = TransactionQuery::from_params(
        search.into_inner(),
        parse_positive(page.into_inner(), "page must be a positive integer")?,
        parse_positive(limit.into_inner(), "limit must be a positive integer")?,
    )
    .map_err(|error| ApiError::bad_request(error.to_string()))?;

    let transactions = state
        .app
        .transactions
        .list_transactions(query)
        .await
        .or_500("Error fetching transactions")?;

    Ok(Json(TransactionsResponse {
        transactions: transactions.into_iter().map(Into::into).collect(),
    }))
}
