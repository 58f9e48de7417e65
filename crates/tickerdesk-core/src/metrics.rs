//! Derived display metrics.
//!
//! Both derivations are total functions: missing, non-numeric, or
//! divide-by-zero inputs resolve to [`Metric::Unavailable`] instead of
//! erroring, so metric derivation never contributes a failure path to a
//! lookup.

use crate::domain::Metric;

/// Quarters needed to compare a quarter against the same quarter one year
/// earlier (index 0 vs index 4 in a most-recent-first series).
const YOY_QUARTER_OFFSET: usize = 4;

/// Year-over-year earnings growth at quarterly granularity, as a percentage
/// rounded to two decimals.
///
/// `eps` is ordered most recent first. A series shorter than five quarters,
/// a non-numeric entry at either index, or a zero prior-quarter EPS all yield
/// the sentinel.
pub fn yoy_eps_growth(eps: &[Metric]) -> Metric {
    let current = eps.first().copied().unwrap_or(Metric::Unavailable);
    let previous = eps
        .get(YOY_QUARTER_OFFSET)
        .copied()
        .unwrap_or(Metric::Unavailable);

    Metric::pct_change(current, previous).round2()
}

/// Growth rate for a record: the EPS comparison when history allows it,
/// otherwise the provider-supplied year-over-year growth fraction scaled to a
/// percentage, otherwise the sentinel.
pub fn growth_rate(eps: &[Metric], provider_growth_fraction: Metric) -> Metric {
    let derived = yoy_eps_growth(eps);
    if !derived.is_unavailable() {
        return derived;
    }

    match provider_growth_fraction {
        Metric::Value(fraction) => Metric::new(fraction * 100.0).round2(),
        Metric::Unavailable => Metric::Unavailable,
    }
}

/// Growth relative to valuation: `growth_rate / pe_ratio`, rounded to two
/// decimals.
pub fn growth_to_valuation(growth_rate: Metric, pe_ratio: Metric) -> Metric {
    Metric::ratio(growth_rate, pe_ratio).round2()
}
