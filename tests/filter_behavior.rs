//! Behavior tests for the industry filter over a favorites list.

use time::OffsetDateTime;

use tickerdesk_core::{distinct_industries, filter_by_industry, StockRecord, Ticker};

fn record(ticker: &str, industry: Option<&str>) -> StockRecord {
    let mut record = StockRecord::unavailable(
        Ticker::parse(ticker).expect("valid ticker"),
        OffsetDateTime::UNIX_EPOCH,
    );
    record.industry = industry.map(str::to_owned);
    record
}

#[test]
fn distinct_industries_collapses_duplicates() {
    let records = vec![
        record("A", Some("Tech")),
        record("B", Some("Tech")),
        record("C", Some("Finance")),
    ];

    let industries = distinct_industries(&records);
    assert_eq!(industries.len(), 2);
    assert!(industries.contains("Tech"));
    assert!(industries.contains("Finance"));
}

#[test]
fn empty_filter_returns_everything_in_original_order() {
    let records = vec![
        record("GME", Some("Retail")),
        record("AAPL", Some("Technology")),
        record("JPM", Some("Finance")),
    ];

    assert_eq!(filter_by_industry(&records, Some("")), records);
    assert_eq!(filter_by_industry(&records, None), records);
}

#[test]
fn filter_returns_exactly_the_matching_subset() {
    let records = vec![
        record("AAPL", Some("Technology")),
        record("JPM", Some("Finance")),
        record("MSFT", Some("Technology")),
        record("UNK", None),
    ];

    let narrowed = filter_by_industry(&records, Some("Technology"));
    let tickers: Vec<&str> = narrowed.iter().map(|r| r.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["AAPL", "MSFT"]);
}

#[test]
fn filter_never_matches_records_without_an_industry() {
    let records = vec![record("UNK", None)];
    assert!(filter_by_industry(&records, Some("Technology")).is_empty());
}

#[test]
fn filtering_does_not_mutate_the_source_list() {
    let records = vec![
        record("AAPL", Some("Technology")),
        record("JPM", Some("Finance")),
    ];
    let before = records.clone();

    let _ = filter_by_industry(&records, Some("Finance"));
    assert_eq!(records, before);
}
