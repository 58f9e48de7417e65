use std::collections::BTreeSet;

use tickerdesk_core::StockRecord;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render_record(
    record: &StockRecord,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => render_json(record, pretty),
        OutputFormat::Table => {
            print_record(record);
            Ok(())
        }
    }
}

pub fn render_records(
    records: &[StockRecord],
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => render_json(&records, pretty),
        OutputFormat::Table => {
            if records.is_empty() {
                println!("no favorites saved");
                return Ok(());
            }
            for (index, record) in records.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                print_record(record);
            }
            Ok(())
        }
    }
}

pub fn render_industries(
    industries: &BTreeSet<String>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => render_json(industries, pretty),
        OutputFormat::Table => {
            if industries.is_empty() {
                println!("no industries (favorites list is empty)");
                return Ok(());
            }
            for industry in industries {
                println!("{industry}");
            }
            Ok(())
        }
    }
}

fn render_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{payload}");
    Ok(())
}

fn print_record(record: &StockRecord) {
    println!("ticker      : {}", record.ticker);
    println!("name        : {}", record.name);
    println!("price       : {} {}", record.price, record.currency);
    println!("p/e ratio   : {}", record.pe_ratio);
    println!("growth rate : {}%", record.growth_rate);
    println!("growth/pe   : {}", record.growth_to_valuation);
    println!("52w range   : {} - {}", record.week52_low, record.week52_high);
    println!(
        "industry    : {}",
        record.industry.as_deref().unwrap_or("unavailable")
    );
    println!("updated     : {}", format_timestamp(record.last_updated));
}

fn format_timestamp(ts: time::OffsetDateTime) -> String {
    ts.format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("<unformattable>"))
}
