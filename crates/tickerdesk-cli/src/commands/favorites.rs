use tickerdesk_core::{filter_by_industry, FavoritesStore, QuoteAggregator, Ticker};

use crate::cli::{FavoritesAddArgs, FavoritesListArgs, FavoritesRemoveArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

pub async fn add(
    args: &FavoritesAddArgs,
    aggregator: &QuoteAggregator,
    mut store: FavoritesStore,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let record = aggregator.lookup(&args.ticker).await?;
    let records = store.add(record)?.to_vec();
    output::render_records(&records, format, pretty)
}

pub fn remove(
    args: &FavoritesRemoveArgs,
    mut store: FavoritesStore,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    // Normalize the input so "aapl" removes the stored "AAPL" entry.
    let ticker = Ticker::parse(&args.ticker)?;
    let records = store.remove(ticker.as_str())?.to_vec();
    output::render_records(&records, format, pretty)
}

pub fn list(
    args: &FavoritesListArgs,
    store: &FavoritesStore,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let records = filter_by_industry(store.records(), args.industry.as_deref());
    output::render_records(&records, format, pretty)
}
