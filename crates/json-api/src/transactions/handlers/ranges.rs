//! Price Histogram Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    errors::ApiError, extensions::*, state::State, transactions::responses::PriceRangeResponse,
};

/// Price Histogram Handler
///
/// Counts sales per price range for the month of `date` in every year.
/// Ranges without sales are left out.
#[endpoint(tags("transactions"), summary = "Price Histogram")]
pub(crate) async fn handler(
    date: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<PriceRangeResponse>>, ApiError> {
    let month = date.into_sale_date()?.month();
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let ranges = state
        .app
        .transactions
        .price_histogram(month)
        .await
        .or_500("Failed to fetch price range data")?;

    Ok(Json(ranges.into_iter().map(Into::into).collect()))
}
