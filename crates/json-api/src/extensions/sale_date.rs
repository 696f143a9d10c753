//! Sale date query parsing helpers.

use salvo::oapi::extract::QueryParam;

use salesboard_app::domain::transactions::query::SaleDate;

use crate::{errors::ApiError, extensions::*};

pub(crate) const INVALID_DATE_MESSAGE: &str = "Invalid date format. Please use YYYY-MM-DD";

pub(crate) trait SaleDateExt {
    /// Parse the `date` query parameter, rejecting missing or malformed values.
    fn into_sale_date(self) -> Result<SaleDate, ApiError>;
}

impl SaleDateExt for QueryParam<String, false> {
    fn into_sale_date(self) -> Result<SaleDate, ApiError> {
        self.into_inner()
            .ok_or_else(|| ApiError::bad_request(INVALID_DATE_MESSAGE))?
            .parse::<SaleDate>()
            .or_400(INVALID_DATE_MESSAGE)
    }
}
