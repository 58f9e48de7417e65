//! Industry-based narrowing of a favorites list. Pure functions, no state.

use std::collections::BTreeSet;

use crate::domain::StockRecord;

/// Distinct industries present in `records`, duplicates collapsed. Records
/// without an industry contribute nothing, so "unavailable" never shows up as
/// a selectable option.
pub fn distinct_industries(records: &[StockRecord]) -> BTreeSet<String> {
    records
        .iter()
        .filter_map(|record| record.industry.clone())
        .collect()
}

/// Narrow `records` to one industry. `None` or an empty string selects all
/// records in their original order; otherwise the match is exact and
/// case-sensitive.
pub fn filter_by_industry(records: &[StockRecord], industry: Option<&str>) -> Vec<StockRecord> {
    match industry {
        None | Some("") => records.to_vec(),
        Some(industry) => records
            .iter()
            .filter(|record| record.industry.as_deref() == Some(industry))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Ticker;
    use time::OffsetDateTime;

    fn record(ticker: &str, industry: Option<&str>) -> StockRecord {
        let mut record = StockRecord::unavailable(
            Ticker::parse(ticker).expect("valid ticker"),
            OffsetDateTime::UNIX_EPOCH,
        );
        record.industry = industry.map(str::to_owned);
        record
    }

    #[test]
    fn collapses_duplicate_industries() {
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
    fn skips_records_without_an_industry() {
        let records = vec![record("A", None), record("B", Some("Energy"))];
        let industries = distinct_industries(&records);
        assert_eq!(industries.len(), 1);
    }

    #[test]
    fn empty_selector_returns_all_in_order() {
        let records = vec![
            record("A", Some("Tech")),
            record("B", Some("Finance")),
            record("C", None),
        ];

        let all = filter_by_industry(&records, None);
        assert_eq!(all, records);

        let all = filter_by_industry(&records, Some(""));
        assert_eq!(all, records);
    }

    #[test]
    fn match_is_exact_and_case_sensitive() {
        let records = vec![
            record("A", Some("Technology")),
            record("B", Some("technology")),
            record("C", Some("Finance")),
        ];

        let narrowed = filter_by_industry(&records, Some("Technology"));
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].ticker.as_str(), "A");
    }
}
