//! CLI argument definitions for tickerdesk.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `lookup` | Fetch and display a ticker's quote and derived metrics |
//! | `favorites add` | Look up a ticker and save it as a favorite |
//! | `favorites remove` | Remove a ticker from the favorites list |
//! | `favorites list` | Show favorites, optionally narrowed to one industry |
//! | `industries` | List the distinct industries across saved favorites |

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Stock lookup with favorites.
///
/// Fetches quote, fundamentals, and earnings data for a ticker, derives
/// growth and valuation metrics, and keeps a durable favorites list that can
/// be filtered by industry.
#[derive(Debug, Parser)]
#[command(name = "tickerdesk", version, about = "Stock lookup with favorites")]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labelled lines for terminal display.
    Table,
    /// JSON output.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the latest quote and derived metrics for a ticker.
    ///
    /// Serves a cached result when one is fresh (within the configured
    /// time-to-live) unless --refresh is given.
    ///
    /// # Examples
    ///
    ///   tickerdesk lookup AAPL
    ///   tickerdesk lookup msft --refresh --format json --pretty
    Lookup(LookupArgs),

    /// Manage the favorites list.
    Favorites(FavoritesArgs),

    /// List the distinct industries present across saved favorites.
    Industries,
}

/// Arguments for the `lookup` command.
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Ticker symbol (e.g. AAPL). Case-insensitive.
    pub ticker: String,

    /// Bypass the cache read and fetch fresh data.
    #[arg(long, default_value_t = false)]
    pub refresh: bool,
}

/// Arguments for the `favorites` command group.
#[derive(Debug, Args)]
pub struct FavoritesArgs {
    #[command(subcommand)]
    pub command: FavoritesCommand,
}

/// Favorites subcommands.
#[derive(Debug, Subcommand)]
pub enum FavoritesCommand {
    /// Look up a ticker and add the result to favorites.
    ///
    /// Adding a ticker that is already saved leaves the list unchanged.
    Add(FavoritesAddArgs),

    /// Remove a saved ticker. Removing an absent ticker is a no-op.
    Remove(FavoritesRemoveArgs),

    /// Show saved favorites.
    List(FavoritesListArgs),
}

#[derive(Debug, Args)]
pub struct FavoritesAddArgs {
    /// Ticker symbol to look up and save.
    pub ticker: String,
}

#[derive(Debug, Args)]
pub struct FavoritesRemoveArgs {
    /// Ticker symbol to remove (matched against the stored uppercase form).
    pub ticker: String,
}

#[derive(Debug, Args)]
pub struct FavoritesListArgs {
    /// Show only favorites in this industry (exact match). Omit for all.
    #[arg(long)]
    pub industry: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_lookup_with_refresh() {
        let cli = Cli::try_parse_from(["tickerdesk", "lookup", "aapl", "--refresh"])
            .expect("must parse");
        match cli.command {
            Command::Lookup(args) => {
                assert_eq!(args.ticker, "aapl");
                assert!(args.refresh);
            }
            _ => panic!("expected lookup command"),
        }
    }

    #[test]
    fn parses_favorites_list_with_industry() {
        let cli = Cli::try_parse_from([
            "tickerdesk",
            "favorites",
            "list",
            "--industry",
            "Technology",
        ])
        .expect("must parse");
        match cli.command {
            Command::Favorites(args) => match args.command {
                FavoritesCommand::List(list) => {
                    assert_eq!(list.industry.as_deref(), Some("Technology"));
                }
                _ => panic!("expected list subcommand"),
            },
            _ => panic!("expected favorites command"),
        }
    }
}
