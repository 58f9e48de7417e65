//! Domain models: tickers, sentinel-bearing metrics, and stock records.

mod metric;
mod record;
mod ticker;

pub use metric::Metric;
pub use record::StockRecord;
pub use ticker::Ticker;
