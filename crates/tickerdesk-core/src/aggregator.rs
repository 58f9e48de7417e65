//! Quote aggregation: one ticker in, one normalized record out.

use std::sync::Arc;

use time::OffsetDateTime;

use crate::cache::QuoteCache;
use crate::config::AppConfig;
use crate::domain::{Metric, StockRecord, Ticker};
use crate::error::LookupError;
use crate::http::HttpClient;
use crate::metrics;
use crate::provider::{AlphaVantage, EarningsPayload, OverviewPayload, QuotePayload};

/// Combines the provider's quote, overview, and earnings endpoints into one
/// [`StockRecord`], with a short-lived cache keyed by ticker.
#[derive(Debug, Clone)]
pub struct QuoteAggregator {
    provider: AlphaVantage,
    cache: QuoteCache,
}

impl QuoteAggregator {
    pub fn new(config: &AppConfig, http: Arc<dyn HttpClient>) -> Self {
        Self {
            provider: AlphaVantage::new(config, http),
            cache: QuoteCache::new(config.cache_ttl),
        }
    }

    pub fn with_parts(provider: AlphaVantage, cache: QuoteCache) -> Self {
        Self { provider, cache }
    }

    /// Look up a ticker, serving a non-expired cached record when present.
    ///
    /// Invalid input fails before any network call. The three upstream
    /// requests are independent, so they run concurrently and join before
    /// merging; if any one fails the whole lookup fails and nothing is
    /// cached. No automatic retry.
    pub async fn lookup(&self, raw_ticker: &str) -> Result<StockRecord, LookupError> {
        let ticker = Ticker::parse(raw_ticker)?;

        if let Some(cached) = self.cache.get(&ticker).await {
            return Ok(cached);
        }

        self.fetch_and_cache(ticker).await
    }

    /// Look up a ticker bypassing the cache read; the fresh result still
    /// replaces any cached entry.
    pub async fn refresh(&self, raw_ticker: &str) -> Result<StockRecord, LookupError> {
        let ticker = Ticker::parse(raw_ticker)?;
        self.fetch_and_cache(ticker).await
    }

    async fn fetch_and_cache(&self, ticker: Ticker) -> Result<StockRecord, LookupError> {
        let (quote, overview, earnings) = tokio::join!(
            self.provider.global_quote(&ticker),
            self.provider.overview(&ticker),
            self.provider.earnings(&ticker),
        );
        let (quote, overview, earnings) = (quote?, overview?, earnings?);

        let record = assemble_record(
            ticker,
            &quote,
            &overview,
            &earnings,
            OffsetDateTime::now_utc(),
        );
        self.cache.put(record.clone()).await;
        Ok(record)
    }
}

/// Merge the three upstream payloads into a normalized record.
///
/// Each field defaults independently; a sparse overview never blocks the
/// quote price from being reported, and vice versa.
fn assemble_record(
    ticker: Ticker,
    quote: &QuotePayload,
    overview: &OverviewPayload,
    earnings: &EarningsPayload,
    as_of: OffsetDateTime,
) -> StockRecord {
    let mut record = StockRecord::unavailable(ticker, as_of);

    if let Some(name) = overview.name.as_deref().filter(|n| !n.trim().is_empty()) {
        record.name = name.to_owned();
    }
    if let Some(currency) = overview
        .currency
        .as_deref()
        .filter(|c| !c.trim().is_empty())
    {
        record.currency = currency.trim().to_ascii_uppercase();
    }
    record.industry = overview
        .industry
        .as_deref()
        .map(str::trim)
        .filter(|i| !i.is_empty() && *i != "None")
        .map(str::to_owned);

    record.price = quote.price();
    record.pe_ratio = Metric::parse(overview.pe_ratio.as_deref());
    record.week52_high = Metric::parse(overview.week52_high.as_deref());
    record.week52_low = Metric::parse(overview.week52_low.as_deref());

    let eps = earnings.eps_series();
    let provider_growth = Metric::parse(overview.quarterly_earnings_growth_yoy.as_deref());
    record.growth_rate = metrics::growth_rate(&eps, provider_growth);
    record.growth_to_valuation = metrics::growth_to_valuation(record.growth_rate, record.pe_ratio);

    record
}
