//! Monthly Sales Summary Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    errors::ApiError, extensions::*, state::State, transactions::responses::SalesSummaryResponse,
};

/// Monthly Sales Summary Handler
///
/// Totals the sales whose timestamp falls in the calendar month (UTC) of
/// `date`.
#[endpoint(tags("transactions"), summary = "Monthly Sales Summary")]
pub(crate) async fn handler(
    date: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<SalesSummaryResponse>, ApiError> {
    let sale_date = date.into_sale_date()?;
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let window = sale_date.month_window().or_400("date is out of range")?;

    let summary = state
        .app
        .transactions
        .sales_summary(window)
        .await
        .or_500("Error fetching statistics")?;

    Ok(Json(summary.into()))
}
