//! Alpha Vantage provider client.
//!
//! All upstream payloads pass through the intermediate serde schemas defined
//! here; the provider's field names (`"05. price"`, `"PERatio"`, ...) appear
//! in exactly one place. Field extraction is defensive: the provider reports
//! numbers as strings and substitutes `"None"` or `"-"` for missing data, so
//! everything numeric funnels through [`Metric::parse`].

use std::sync::Arc;

use serde::Deserialize;

use crate::config::AppConfig;
use crate::domain::{Metric, Ticker};
use crate::error::UpstreamError;
use crate::http::{HttpClient, HttpRequest};
use crate::throttle::RequestBudget;

/// Client for the upstream quote/fundamentals/earnings endpoints.
#[derive(Clone)]
pub struct AlphaVantage {
    http: Arc<dyn HttpClient>,
    api_key: String,
    base_url: String,
    timeout_ms: u64,
    budget: RequestBudget,
}

impl AlphaVantage {
    pub fn new(config: &AppConfig, http: Arc<dyn HttpClient>) -> Self {
        Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            timeout_ms: config.timeout_ms,
            budget: RequestBudget::new(config.quota_window, config.quota_limit),
        }
    }

    /// Fetch the current quote (`GLOBAL_QUOTE`).
    pub async fn global_quote(&self, ticker: &Ticker) -> Result<QuotePayload, UpstreamError> {
        let body = self.fetch("GLOBAL_QUOTE", ticker).await?;
        parse_payload(&body)
    }

    /// Fetch the company overview/fundamentals snapshot (`OVERVIEW`).
    pub async fn overview(&self, ticker: &Ticker) -> Result<OverviewPayload, UpstreamError> {
        let body = self.fetch("OVERVIEW", ticker).await?;
        parse_payload(&body)
    }

    /// Fetch quarterly earnings history (`EARNINGS`).
    pub async fn earnings(&self, ticker: &Ticker) -> Result<EarningsPayload, UpstreamError> {
        let body = self.fetch("EARNINGS", ticker).await?;
        parse_payload(&body)
    }

    async fn fetch(&self, function: &str, ticker: &Ticker) -> Result<String, UpstreamError> {
        if !self.budget.try_acquire() {
            return Err(UpstreamError::RateLimited(format!(
                "local request budget exhausted before calling {function}"
            )));
        }

        let url = format!(
            "{}?function={}&symbol={}&apikey={}",
            self.base_url,
            function,
            ticker.as_str(),
            self.api_key
        );

        let request = HttpRequest::get(url).with_timeout_ms(self.timeout_ms);
        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| UpstreamError::Transport(e.message().to_owned()))?;

        if !response.is_success() {
            return Err(UpstreamError::Status(response.status));
        }

        check_advisory(&response.body)?;
        Ok(response.body)
    }
}

impl std::fmt::Debug for AlphaVantage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never expose the API key.
        f.debug_struct("AlphaVantage")
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish_non_exhaustive()
    }
}

/// Inspect a 200 body for provider-level advisories before payload parsing.
///
/// The provider reports errors inside successful HTTP responses: an
/// `"Error Message"` or `"Information"` field for bad requests, a `"Note"`
/// field when the request quota is exceeded. Both are fatal for the current
/// lookup.
fn check_advisory(body: &str) -> Result<(), UpstreamError> {
    let advisory: ProviderAdvisory = serde_json::from_str(body)
        .map_err(|e| UpstreamError::Payload(format!("response is not valid JSON: {e}")))?;

    if let Some(note) = advisory.note {
        return Err(UpstreamError::RateLimited(note));
    }
    if let Some(message) = advisory.error_message.or(advisory.information) {
        return Err(UpstreamError::Provider(message));
    }
    Ok(())
}

fn parse_payload<T>(body: &str) -> Result<T, UpstreamError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_str(body).map_err(|e| UpstreamError::Payload(e.to_string()))
}

#[derive(Debug, Deserialize)]
struct ProviderAdvisory {
    #[serde(rename = "Error Message", default)]
    error_message: Option<String>,
    #[serde(rename = "Note", default)]
    note: Option<String>,
    #[serde(rename = "Information", default)]
    information: Option<String>,
}

/// `GLOBAL_QUOTE` response. An unknown symbol comes back as an empty object,
/// which parses to a payload with no quote block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuotePayload {
    #[serde(rename = "Global Quote", default)]
    pub quote: Option<GlobalQuoteFields>,
}

impl QuotePayload {
    pub fn price(&self) -> Metric {
        Metric::parse(self.quote.as_ref().and_then(|q| q.price.as_deref()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalQuoteFields {
    #[serde(rename = "05. price", default)]
    pub price: Option<String>,
}

/// `OVERVIEW` response fields used by the aggregator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverviewPayload {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Industry", default)]
    pub industry: Option<String>,
    #[serde(rename = "Currency", default)]
    pub currency: Option<String>,
    #[serde(rename = "PERatio", default)]
    pub pe_ratio: Option<String>,
    #[serde(rename = "52WeekHigh", default)]
    pub week52_high: Option<String>,
    #[serde(rename = "52WeekLow", default)]
    pub week52_low: Option<String>,
    #[serde(rename = "QuarterlyEarningsGrowthYOY", default)]
    pub quarterly_earnings_growth_yoy: Option<String>,
}

/// `EARNINGS` response; quarters are ordered most recent first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EarningsPayload {
    #[serde(rename = "quarterlyEarnings", default)]
    pub quarterly: Vec<QuarterlyEarnings>,
}

impl EarningsPayload {
    /// Reported EPS per quarter, most recent first, with non-numeric entries
    /// collapsed to the sentinel.
    pub fn eps_series(&self) -> Vec<Metric> {
        self.quarterly
            .iter()
            .map(|quarter| Metric::parse(quarter.reported_eps.as_deref()))
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuarterlyEarnings {
    #[serde(rename = "fiscalDateEnding", default)]
    pub fiscal_date_ending: Option<String>,
    #[serde(rename = "reportedEPS", default)]
    pub reported_eps: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advisory_detects_provider_error_payload() {
        let err = check_advisory(r#"{"Error Message": "Invalid API call."}"#)
            .expect_err("must surface provider error");
        assert!(matches!(err, UpstreamError::Provider(_)));
    }

    #[test]
    fn advisory_detects_rate_limit_note() {
        let err = check_advisory(
            r#"{"Note": "Thank you for using our API! Our standard API rate limit is 5 requests per minute."}"#,
        )
        .expect_err("must surface rate limit");
        assert!(err.is_rate_limited());
    }

    #[test]
    fn advisory_passes_clean_payloads() {
        assert!(check_advisory(r#"{"Global Quote": {"05. price": "150.42"}}"#).is_ok());
    }

    #[test]
    fn quote_payload_extracts_price_defensively() {
        let payload: QuotePayload =
            serde_json::from_str(r#"{"Global Quote": {"05. price": "150.4200"}}"#).expect("parse");
        assert_eq!(payload.price(), Metric::Value(150.42));

        let empty: QuotePayload = serde_json::from_str("{}").expect("parse");
        assert!(empty.price().is_unavailable());
    }

    #[test]
    fn eps_series_collapses_non_numeric_quarters() {
        let payload: EarningsPayload = serde_json::from_str(
            r#"{"quarterlyEarnings": [
                {"fiscalDateEnding": "2024-03-31", "reportedEPS": "2.00"},
                {"fiscalDateEnding": "2023-12-31", "reportedEPS": "None"}
            ]}"#,
        )
        .expect("parse");

        let eps = payload.eps_series();
        assert_eq!(eps, vec![Metric::Value(2.0), Metric::Unavailable]);
    }
}
