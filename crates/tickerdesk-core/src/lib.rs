//! # tickerdesk-core
//!
//! Stock lookup with favorites: fetch a ticker's quote, fundamentals, and
//! earnings history from the upstream provider, merge them into one normalized
//! record with derived growth metrics, and keep a durable list of favorite
//! tickers with industry-based filtering.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`aggregator`] | Ticker lookup: cache check, concurrent fan-out, merge |
//! | [`cache`] | Transient TTL quote cache |
//! | [`config`] | Runtime configuration from environment |
//! | [`domain`] | `Ticker`, `Metric` sentinel, `StockRecord` |
//! | [`error`] | Validation, upstream, lookup, and store errors |
//! | [`favorites`] | Durable favorites collection over a blob store |
//! | [`filter`] | Pure industry filter functions |
//! | [`http`] | Transport seam (reqwest / no-op / test doubles) |
//! | [`metrics`] | Growth-rate and growth-to-valuation derivation |
//! | [`provider`] | Upstream provider client and payload schemas |
//! | [`throttle`] | Local per-window request budget |
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tickerdesk_core::{AppConfig, QuoteAggregator, ReqwestHttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env();
//!     let aggregator = QuoteAggregator::new(&config, Arc::new(ReqwestHttpClient::new()));
//!
//!     let record = aggregator.lookup("aapl").await?;
//!     println!("{}: {}", record.ticker, record.price);
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! Invalid input fails with a [`ValidationError`] before any network call;
//! provider-reported errors and rate-limit advisories surface as
//! [`UpstreamError`] and are never retried automatically. Derived metrics are
//! total: missing or non-numeric data becomes [`Metric::Unavailable`], never
//! an error. A missing or corrupt favorites blob loads as an empty list.
//!
//! The API key is read from the environment and is never logged or included
//! in `Debug` output.

pub mod aggregator;
pub mod cache;
pub mod config;
pub mod domain;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod http;
pub mod metrics;
pub mod provider;
pub mod throttle;

pub use aggregator::QuoteAggregator;
pub use cache::{CachedQuote, QuoteCache};
pub use config::AppConfig;
pub use domain::{Metric, StockRecord, Ticker};
pub use error::{LookupError, StoreError, UpstreamError, ValidationError};
pub use favorites::{BlobStore, FavoritesStore, FileStore, MemoryStore, FAVORITES_KEY};
pub use filter::{distinct_industries, filter_by_industry};
pub use http::{HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient};
pub use provider::AlphaVantage;
pub use throttle::RequestBudget;
