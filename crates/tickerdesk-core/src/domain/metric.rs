use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A display metric that is either a finite number or unavailable.
///
/// Upstream fields arrive as strings that may be missing, `"None"`, `"-"`, or
/// otherwise non-numeric. Rather than failing the lookup, every extraction and
/// every derived computation collapses bad input to `Unavailable`. Arithmetic
/// over metrics is total: it never produces NaN, infinity, or an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Value(f64),
    Unavailable,
}

impl Metric {
    /// Wrap a number, collapsing NaN and infinities to `Unavailable`.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self::Value(value)
        } else {
            Self::Unavailable
        }
    }

    /// Leniently parse an optional upstream string field.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(text) => text
                .trim()
                .parse::<f64>()
                .map_or(Self::Unavailable, Self::new),
            None => Self::Unavailable,
        }
    }

    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(value),
            Self::Unavailable => None,
        }
    }

    pub const fn is_unavailable(self) -> bool {
        matches!(self, Self::Unavailable)
    }

    /// Round to two decimal places.
    pub fn round2(self) -> Self {
        match self {
            Self::Value(value) => Self::new((value * 100.0).round() / 100.0),
            Self::Unavailable => Self::Unavailable,
        }
    }

    /// Percentage change from `previous` to `current`.
    ///
    /// A zero or unavailable previous value yields `Unavailable`, never a
    /// division error.
    pub fn pct_change(current: Self, previous: Self) -> Self {
        match (current, previous) {
            (Self::Value(current), Self::Value(previous)) if previous != 0.0 => {
                Self::new((current - previous) / previous.abs() * 100.0)
            }
            _ => Self::Unavailable,
        }
    }

    /// Ratio of `numerator` to `denominator`; unavailable or zero denominator
    /// yields `Unavailable`.
    pub fn ratio(numerator: Self, denominator: Self) -> Self {
        match (numerator, denominator) {
            (Self::Value(numerator), Self::Value(denominator)) if denominator != 0.0 => {
                Self::new(numerator / denominator)
            }
            _ => Self::Unavailable,
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Unavailable => f.write_str("unavailable"),
        }
    }
}

impl From<Option<f64>> for Metric {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Unavailable, Self::new)
    }
}

// Wire shape: a JSON number when present, null when unavailable. Lenient on
// the way in so a hand-edited or stale favorites blob cannot fail a load.
impl Serialize for Metric {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(value) => serializer.serialize_f64(*value),
            Self::Unavailable => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Metric {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<f64>::deserialize(deserializer)?;
        Ok(Self::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_handles_missing_and_non_numeric_fields() {
        assert_eq!(Metric::parse(None), Metric::Unavailable);
        assert_eq!(Metric::parse(Some("None")), Metric::Unavailable);
        assert_eq!(Metric::parse(Some("-")), Metric::Unavailable);
        assert_eq!(Metric::parse(Some(" 25.5 ")), Metric::Value(25.5));
    }

    #[test]
    fn non_finite_values_collapse_to_unavailable() {
        assert_eq!(Metric::new(f64::NAN), Metric::Unavailable);
        assert_eq!(Metric::new(f64::INFINITY), Metric::Unavailable);
    }

    #[test]
    fn pct_change_short_circuits_on_zero_previous() {
        assert_eq!(
            Metric::pct_change(Metric::Value(2.0), Metric::Value(0.0)),
            Metric::Unavailable
        );
        assert_eq!(
            Metric::pct_change(Metric::Value(2.0), Metric::Unavailable),
            Metric::Unavailable
        );
    }

    #[test]
    fn pct_change_uses_absolute_previous() {
        let change = Metric::pct_change(Metric::Value(1.0), Metric::Value(-2.0));
        assert_eq!(change.round2(), Metric::Value(150.0));
    }

    #[test]
    fn ratio_short_circuits_on_zero_denominator() {
        assert_eq!(
            Metric::ratio(Metric::Value(10.0), Metric::Value(0.0)),
            Metric::Unavailable
        );
    }

    #[test]
    fn serde_round_trips_unavailable_as_null() {
        let json = serde_json::to_string(&Metric::Unavailable).expect("serialize");
        assert_eq!(json, "null");

        let back: Metric = serde_json::from_str("null").expect("deserialize");
        assert_eq!(back, Metric::Unavailable);

        let back: Metric = serde_json::from_str("33.33").expect("deserialize");
        assert_eq!(back, Metric::Value(33.33));
    }
}
