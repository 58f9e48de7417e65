use tickerdesk_core::{distinct_industries, FavoritesStore};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output;

pub fn run(store: &FavoritesStore, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let industries = distinct_industries(store.records());
    output::render_industries(&industries, format, pretty)
}
