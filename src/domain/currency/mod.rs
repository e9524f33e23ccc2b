//! Currency domain — currency overview lines, trade samples, the currency catalog.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::domain::lookup::NameMatcher;
use crate::domain::sparkline::SparkLine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fallback for a line that carries no currency name.
pub const UNKNOWN_CURRENCY_NAME: &str = "Unknown";

/// One observed trade sample for a currency pair, in one direction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeDetail {
    pub id: i64,
    pub league_id: i64,
    pub pay_currency_id: i64,
    pub get_currency_id: i64,
    /// Sample timestamp as sent (ISO 8601, UTC).
    pub sample_time_utc: String,
    pub count: i64,
    pub value: f64,
    pub data_point_count: i64,
    pub includes_secondary: bool,
    pub listing_count: i64,
}

impl TradeDetail {
    /// Parsed `sample_time_utc`, or `None` when empty or not RFC 3339.
    pub fn sample_time(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.sample_time_utc)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

/// A single currency's market snapshot.
///
/// `pay` / `receive` are `None` when nothing traded in that direction.
/// Sparklines are never absent: a missing one is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyLine {
    pub currency_type_name: String,
    pub pay: Option<TradeDetail>,
    pub receive: Option<TradeDetail>,
    pub pay_spark_line: SparkLine,
    pub receive_spark_line: SparkLine,
    pub chaos_equivalent: f64,
    pub low_confidence_pay_spark_line: SparkLine,
    pub low_confidence_receive_spark_line: SparkLine,
    pub details_id: String,
}

/// Catalog entry for a currency. `id` is what the history endpoint takes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyDetail {
    pub id: i64,
    pub name: String,
    pub icon: Option<String>,
    pub trade_id: Option<String>,
}

/// Normalized `currencyoverview` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrencyOverview {
    pub lines: Vec<CurrencyLine>,
    pub currency_details: Vec<CurrencyDetail>,
}

impl CurrencyOverview {
    /// First line whose `currency_type_name` matches `name`, ignoring case.
    pub fn find_line(&self, name: &str) -> Option<&CurrencyLine> {
        let matcher = NameMatcher::new(name);
        self.lines
            .iter()
            .find(|line| matcher.matches(&line.currency_type_name))
    }

    /// First catalog entry whose `name` matches, ignoring case.
    pub fn find_detail(&self, name: &str) -> Option<&CurrencyDetail> {
        let matcher = NameMatcher::new(name);
        self.currency_details
            .iter()
            .find(|detail| matcher.matches(&detail.name))
    }

    /// Numeric id for the history endpoint.
    ///
    /// Lines don't carry it; only `currency_details` is searched.
    pub fn resolve_id(&self, name: &str) -> Option<i64> {
        self.find_detail(name).map(|detail| detail.id)
    }

    /// Price of `name` expressed in units of `reference`.
    ///
    /// Both must be present as lines; `None` when the reference is worth nothing.
    pub fn value_in(&self, name: &str, reference: &str) -> Option<f64> {
        let price = self.find_line(name)?.chaos_equivalent;
        let unit = self.find_line(reference)?.chaos_equivalent;
        if unit == 0.0 {
            return None;
        }
        Some(price / unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, chaos: f64) -> CurrencyLine {
        CurrencyLine {
            currency_type_name: name.to_string(),
            pay: None,
            receive: None,
            pay_spark_line: SparkLine::default(),
            receive_spark_line: SparkLine::default(),
            chaos_equivalent: chaos,
            low_confidence_pay_spark_line: SparkLine::default(),
            low_confidence_receive_spark_line: SparkLine::default(),
            details_id: name.to_lowercase().replace(' ', "-"),
        }
    }

    fn detail(id: i64, name: &str) -> CurrencyDetail {
        CurrencyDetail {
            id,
            name: name.to_string(),
            icon: None,
            trade_id: None,
        }
    }

    fn overview() -> CurrencyOverview {
        CurrencyOverview {
            lines: vec![
                line("Divine Orb", 180.0),
                line("Mirror of Kalandra", 36_000.0),
                line("Worthless Shard", 0.0),
                line("divine orb", 1.0),
            ],
            currency_details: vec![detail(1, "Chaos Orb"), detail(2, "Divine Orb")],
        }
    }

    #[test]
    fn test_find_line_ignores_case_and_takes_first() {
        let ov = overview();
        let found = ov.find_line("DIVINE ORB").unwrap();
        assert_eq!(found.chaos_equivalent, 180.0);
        assert!(ov.find_line("Exalted Orb").is_none());
    }

    #[test]
    fn test_resolve_id_uses_details_only() {
        let ov = overview();
        assert_eq!(ov.resolve_id("divine orb"), Some(2));
        assert_eq!(ov.resolve_id("Chaos Orb"), Some(1));
        // Present as a line, absent from the catalog.
        assert_eq!(ov.resolve_id("Mirror of Kalandra"), None);
    }

    #[test]
    fn test_value_in() {
        let ov = overview();
        assert_eq!(ov.value_in("Mirror of Kalandra", "Divine Orb"), Some(200.0));
        assert_eq!(ov.value_in("Mirror of Kalandra", "Worthless Shard"), None);
        assert_eq!(ov.value_in("Mirror of Kalandra", "Exalted Orb"), None);
    }

    #[test]
    fn test_sample_time() {
        let mut trade = TradeDetail {
            sample_time_utc: "2024-08-01T12:30:00.1234567Z".to_string(),
            ..TradeDetail::default()
        };
        let t = trade.sample_time().unwrap();
        assert_eq!(t.timestamp(), 1_722_515_400);

        trade.sample_time_utc = String::new();
        assert!(trade.sample_time().is_none());
    }

    #[test]
    fn test_empty_overview_lookups() {
        let ov = CurrencyOverview::default();
        assert!(ov.find_line("Chaos Orb").is_none());
        assert!(ov.resolve_id("Chaos Orb").is_none());
    }
}
