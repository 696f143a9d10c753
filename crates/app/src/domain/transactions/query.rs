//! Query parameters for listing and reporting over sale records.

use std::{num::NonZeroU32, str::FromStr};

use jiff::{
    Timestamp, ToSpan,
    civil::Date,
    tz::TimeZone,
};

use crate::domain::transactions::errors::{InvalidPagination, InvalidSaleDate};

/// Page returned when none is requested.
pub const DEFAULT_PAGE: NonZeroU32 = NonZeroU32::MIN;

/// Page size used when none is requested.
pub const DEFAULT_LIMIT: NonZeroU32 = match NonZeroU32::new(10) {
    Some(limit) => limit,
    None => NonZeroU32::MIN,
};

const SALE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Search and pagination for the transaction listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionQuery {
    search: Option<String>,
    page: NonZeroU32,
    limit: NonZeroU32,
}

impl Default for TransactionQuery {
    fn default() -> Self {
        Self {
            search: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl TransactionQuery {
    /// Build a query from raw request values, applying defaults for absent ones.
    ///
    /// A blank search string is treated as no search.
    ///
    /// # Errors
    ///
    /// Returns an error when `page` or `limit` is zero.
    pub fn from_params(
        search: Option<String>,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Self, InvalidPagination> {
        let page = match page {
            Some(page) => NonZeroU32::new(page).ok_or(InvalidPagination::Page)?,
            None => DEFAULT_PAGE,
        };

        let limit = match limit {
            Some(limit) => NonZeroU32::new(limit).ok_or(InvalidPagination::Limit)?,
            None => DEFAULT_LIMIT,
        };

        Ok(Self {
            search: search.filter(|search| !search.trim().is_empty()),
            page,
            limit,
        })
    }

    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    #[must_use]
    pub fn page(&self) -> NonZeroU32 {
        self.page
    }

    #[must_use]
    pub fn limit(&self) -> NonZeroU32 {
        self.limit
    }

    /// Number of matching records skipped before this page.
    ///
    /// Saturates at `i64::MAX`; such a page lies past any stored data.
    #[must_use]
    pub fn offset(&self) -> i64 {
        (i64::from(self.page.get()) - 1).saturating_mul(i64::from(self.limit.get()))
    }

    /// `ILIKE` pattern matching the search text anywhere, with wildcards in
    /// the text itself escaped so it is matched literally.
    #[must_use]
    pub fn search_pattern(&self) -> Option<String> {
        self.search().map(|search| {
            let mut pattern = String::with_capacity(search.len() + 2);

            pattern.push('%');

            for c in search.chars() {
                if matches!(c, '%' | '_' | '\\') {
                    pattern.push('\\');
                }

                pattern.push(c);
            }

            pattern.push('%');
            pattern
        })
    }
}

/// A `YYYY-MM-DD` calendar date naming the month to report on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleDate(Date);

impl FromStr for SaleDate {
    type Err = InvalidSaleDate;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if !has_sale_date_shape(value) {
            return Err(InvalidSaleDate::Shape);
        }

        Ok(Self(Date::strptime(SALE_DATE_FORMAT, value)?))
    }
}

/// Exactly `DDDD-DD-DD`; `strptime` alone also takes unpadded fields, signs
/// and surrounding whitespace.
fn has_sale_date_shape(value: &str) -> bool {
    value.len() == 10
        && value.bytes().enumerate().all(|(index, byte)| match index {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

impl From<Date> for SaleDate {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl SaleDate {
    #[must_use]
    pub fn date(self) -> Date {
        self.0
    }

    /// Month number of this date, for year-agnostic matching.
    #[must_use]
    pub fn month(self) -> SaleMonth {
        SaleMonth(self.0.month())
    }

    /// UTC window spanning the whole calendar month of this date.
    ///
    /// # Errors
    ///
    /// Returns an error when the month boundary falls outside the supported
    /// timestamp range.
    pub fn month_window(self) -> Result<MonthWindow, InvalidSaleDate> {
        MonthWindow::containing(self.0)
    }
}

/// Calendar month number (1-12) matched against sales in any year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleMonth(i8);

impl SaleMonth {
    #[must_use]
    pub fn number(self) -> i32 {
        i32::from(self.0)
    }
}

/// Half-open timestamp range `[start, end)` covering one calendar month in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    start: Timestamp,
    end: Timestamp,
}

impl MonthWindow {
    /// Window of the month that contains `date`.
    ///
    /// # Errors
    ///
    /// Returns an error when either boundary is out of range.
    pub fn containing(date: Date) -> Result<Self, InvalidSaleDate> {
        let first = date.first_of_month();
        let next = first.checked_add(1.month())?;

        Ok(Self {
            start: first.to_zoned(TimeZone::UTC)?.timestamp(),
            end: next.to_zoned(TimeZone::UTC)?.timestamp(),
        })
    }

    /// First instant of the month.
    #[must_use]
    pub fn start(self) -> Timestamp {
        self.start
    }

    /// First instant of the following month (exclusive).
    #[must_use]
    pub fn end(self) -> Timestamp {
        self.end
    }
}
