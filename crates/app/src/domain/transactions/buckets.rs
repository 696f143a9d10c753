//! Price histogram buckets.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Price range reported by the histogram.
///
/// Each bucket holds prices greater than the previous bucket's `max` and up
/// to and including its own `max`; the last bucket is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBucket {
    pub min: u32,
    pub max: Option<u32>,
}

impl PriceBucket {
    const fn bounded(min: u32, max: u32) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }
}

impl Display for PriceBucket {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.max {
            Some(max) => write!(f, "{}-{max}", self.min),
            None => write!(f, "{}-Infinity", self.min),
        }
    }
}

/// Histogram buckets in ascending price order.
pub const PRICE_BUCKETS: [PriceBucket; 10] = [
    PriceBucket::bounded(0, 100),
    PriceBucket::bounded(101, 200),
    PriceBucket::bounded(201, 300),
    PriceBucket::bounded(301, 400),
    PriceBucket::bounded(401, 500),
    PriceBucket::bounded(501, 600),
    PriceBucket::bounded(601, 700),
    PriceBucket::bounded(701, 800),
    PriceBucket::bounded(801, 900),
    PriceBucket { min: 901, max: None },
];
