use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::{Metric, Ticker};

/// Normalized result of a lookup, and the unit stored as a favorite.
///
/// Every field except `ticker` is independently defaultable: numeric fields
/// fall back to [`Metric::Unavailable`], `industry` to `None`, `name` to the
/// ticker itself, and `currency` to `"USD"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub ticker: Ticker,
    pub name: String,
    pub price: Metric,
    pub pe_ratio: Metric,
    pub growth_rate: Metric,
    pub growth_to_valuation: Metric,
    pub week52_high: Metric,
    pub week52_low: Metric,
    pub industry: Option<String>,
    pub currency: String,
    #[serde(with = "time::serde::rfc3339")]
    pub added_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
}

impl StockRecord {
    /// A record with every optional field at its unavailable default,
    /// stamped with the given fetch time.
    pub fn unavailable(ticker: Ticker, as_of: OffsetDateTime) -> Self {
        let name = ticker.as_str().to_owned();
        Self {
            ticker,
            name,
            price: Metric::Unavailable,
            pe_ratio: Metric::Unavailable,
            growth_rate: Metric::Unavailable,
            growth_to_valuation: Metric::Unavailable,
            week52_high: Metric::Unavailable,
            week52_low: Metric::Unavailable,
            industry: None,
            currency: String::from("USD"),
            added_at: as_of,
            last_updated: as_of,
        }
    }
}
