//! Category Breakdown Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    errors::ApiError, extensions::*, state::State, transactions::responses::CategoryCountResponse,
};

/// Category Breakdown Handler
///
/// Counts sales per category for the month of `date` in every year.
#[endpoint(tags("transactions"), summary = "Category Breakdown")]
pub(crate) async fn handler(
    date: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<CategoryCountResponse>>, ApiError> {
    let month = date.into_sale_date()?.month();
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .transactions
        .category_breakdown(month)
        .await
        .or_500("Failed to fetch pie chart data")?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}
