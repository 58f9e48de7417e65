mod favorites;
mod industries;
mod lookup;

use std::sync::Arc;

use tickerdesk_core::{
    AppConfig, FavoritesStore, FileStore, QuoteAggregator, ReqwestHttpClient,
};

use crate::cli::{Cli, Command, FavoritesCommand};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let config = AppConfig::from_env();

    match &cli.command {
        Command::Lookup(args) => {
            let aggregator = build_aggregator(&config);
            lookup::run(args, &aggregator, cli.format, cli.pretty).await
        }
        Command::Favorites(args) => match &args.command {
            FavoritesCommand::Add(add) => {
                let aggregator = build_aggregator(&config);
                let store = open_store(&config)?;
                favorites::add(add, &aggregator, store, cli.format, cli.pretty).await
            }
            FavoritesCommand::Remove(remove) => {
                let store = open_store(&config)?;
                favorites::remove(remove, store, cli.format, cli.pretty)
            }
            FavoritesCommand::List(list) => {
                let store = open_store(&config)?;
                favorites::list(list, &store, cli.format, cli.pretty)
            }
        },
        Command::Industries => {
            let store = open_store(&config)?;
            industries::run(&store, cli.format, cli.pretty)
        }
    }
}

fn build_aggregator(config: &AppConfig) -> QuoteAggregator {
    QuoteAggregator::new(config, Arc::new(ReqwestHttpClient::new()))
}

fn open_store(config: &AppConfig) -> Result<FavoritesStore, CliError> {
    let blob = Arc::new(FileStore::new(config.data_dir.clone()));
    Ok(FavoritesStore::open(blob)?)
}
