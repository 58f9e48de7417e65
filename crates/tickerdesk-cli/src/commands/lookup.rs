use tickerdesk_core::QuoteAggregator;

use crate::cli::{LookupArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

pub async fn run(
    args: &LookupArgs,
    aggregator: &QuoteAggregator,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let record = if args.refresh {
        aggregator.refresh(&args.ticker).await?
    } else {
        aggregator.lookup(&args.ticker).await?
    };

    output::render_record(&record, format, pretty)
}
