//! Conversion: currency overview JSON → CurrencyOverview.

use super::wire;
use super::{CurrencyDetail, CurrencyLine, CurrencyOverview, TradeDetail, UNKNOWN_CURRENCY_NAME};
use crate::error::MalformedResponse;
use crate::shared::json::{array_field, expect_object, parse_elements};
use crate::shared::Endpoint;
use serde_json::Value;

impl From<wire::TradeDetailResponse> for TradeDetail {
    fn from(t: wire::TradeDetailResponse) -> Self {
        Self {
            id: t.id,
            league_id: t.league_id,
            pay_currency_id: t.pay_currency_id,
            get_currency_id: t.get_currency_id,
            sample_time_utc: t.sample_time_utc,
            count: t.count,
            value: t.value,
            data_point_count: t.data_point_count,
            includes_secondary: t.includes_secondary,
            listing_count: t.listing_count,
        }
    }
}

impl From<wire::CurrencyLineResponse> for CurrencyLine {
    fn from(l: wire::CurrencyLineResponse) -> Self {
        Self {
            currency_type_name: l
                .currency_type_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNKNOWN_CURRENCY_NAME.to_string()),
            pay: l.pay.map(TradeDetail::from),
            receive: l.receive.map(TradeDetail::from),
            pay_spark_line: l.pay_spark_line.unwrap_or_default().into(),
            receive_spark_line: l.receive_spark_line.unwrap_or_default().into(),
            chaos_equivalent: l.chaos_equivalent,
            low_confidence_pay_spark_line: l.low_confidence_pay_spark_line.unwrap_or_default().into(),
            low_confidence_receive_spark_line: l
                .low_confidence_receive_spark_line
                .unwrap_or_default()
                .into(),
            details_id: l.details_id.unwrap_or_default(),
        }
    }
}

impl From<wire::CurrencyDetailResponse> for CurrencyDetail {
    fn from(d: wire::CurrencyDetailResponse) -> Self {
        Self {
            id: d.id,
            name: d.name.unwrap_or_default(),
            icon: d.icon,
            trade_id: d.trade_id,
        }
    }
}

impl TryFrom<&Value> for CurrencyOverview {
    type Error = MalformedResponse;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let endpoint = Endpoint::CurrencyOverview;
        let envelope = expect_object(value, endpoint)?;

        let lines = parse_elements::<wire::CurrencyLineResponse>(
            array_field(envelope, "lines", endpoint),
            endpoint,
            "currency line",
        )
        .into_iter()
        .map(CurrencyLine::from)
        .collect();

        let currency_details = parse_elements::<wire::CurrencyDetailResponse>(
            array_field(envelope, "currencyDetails", endpoint),
            endpoint,
            "currency detail",
        )
        .into_iter()
        .map(CurrencyDetail::from)
        .collect();

        Ok(Self {
            lines,
            currency_details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sparkline::SparkLine;
    use crate::shared::JsonShape;
    use serde_json::json;

    fn full_line() -> Value {
        json!({
            "currencyTypeName": "Divine Orb",
            "pay": {
                "id": 0,
                "league_id": 210,
                "pay_currency_id": 3,
                "get_currency_id": 1,
                "sample_time_utc": "2024-08-01T12:30:00Z",
                "count": 140,
                "value": 0.0055,
                "data_point_count": 1,
                "includes_secondary": true,
                "listing_count": 622
            },
            "receive": {
                "id": 0,
                "league_id": 210,
                "pay_currency_id": 1,
                "get_currency_id": 3,
                "sample_time_utc": "2024-08-01T12:30:00Z",
                "count": 300,
                "value": 181.0,
                "data_point_count": 1,
                "includes_secondary": true,
                "listing_count": 1500
            },
            "paySparkLine": {"data": [0, 1.2, null], "totalChange": 1.2},
            "receiveSparkLine": {"data": [0, -0.5], "totalChange": -0.5},
            "chaosEquivalent": 180.5,
            "lowConfidencePaySparkLine": {"data": [], "totalChange": 0},
            "lowConfidenceReceiveSparkLine": {"data": [0], "totalChange": 0},
            "detailsId": "divine-orb"
        })
    }

    #[test]
    fn test_full_line_conversion() {
        let payload = json!({
            "lines": [full_line()],
            "currencyDetails": [{"id": 3, "icon": "https://web.poecdn.com/divine.png", "name": "Divine Orb", "tradeId": "divine"}]
        });
        let ov = CurrencyOverview::try_from(&payload).unwrap();
        assert_eq!(ov.lines.len(), 1);

        let line = &ov.lines[0];
        assert_eq!(line.currency_type_name, "Divine Orb");
        assert_eq!(line.chaos_equivalent, 180.5);
        assert_eq!(line.details_id, "divine-orb");
        assert_eq!(line.pay_spark_line.data, vec![0.0, 1.2, 0.0]);
        assert_eq!(line.low_confidence_receive_spark_line.data, vec![0.0]);

        let pay = line.pay.as_ref().unwrap();
        assert_eq!(pay.league_id, 210);
        assert_eq!(pay.pay_currency_id, 3);
        assert_eq!(pay.listing_count, 622);
        assert!(pay.includes_secondary);
        assert_eq!(line.receive.as_ref().unwrap().value, 181.0);

        let detail = &ov.currency_details[0];
        assert_eq!(detail.id, 3);
        assert_eq!(detail.trade_id.as_deref(), Some("divine"));
        assert!(detail.icon.is_some());
    }

    #[test]
    fn test_minimal_line_gets_defaults() {
        let payload = json!({"lines": [{}]});
        let ov = CurrencyOverview::try_from(&payload).unwrap();
        let line = &ov.lines[0];
        assert_eq!(line.currency_type_name, "Unknown");
        assert!(line.pay.is_none());
        assert!(line.receive.is_none());
        assert_eq!(line.pay_spark_line, SparkLine::default());
        assert_eq!(line.low_confidence_pay_spark_line, SparkLine::default());
        assert_eq!(line.chaos_equivalent, 0.0);
        assert_eq!(line.details_id, "");
        assert!(ov.currency_details.is_empty());
    }

    #[test]
    fn test_empty_name_becomes_unknown() {
        let payload = json!({"lines": [{"currencyTypeName": ""}]});
        let ov = CurrencyOverview::try_from(&payload).unwrap();
        assert_eq!(ov.lines[0].currency_type_name, "Unknown");
    }

    #[test]
    fn test_partial_trade_detail_defaults() {
        let payload = json!({"lines": [{"currencyTypeName": "Orb of Alteration", "receive": {"value": 0.1}, "pay": null}]});
        let ov = CurrencyOverview::try_from(&payload).unwrap();
        let receive = ov.lines[0].receive.as_ref().unwrap();
        assert_eq!(receive.value, 0.1);
        assert_eq!(receive.count, 0);
        assert_eq!(receive.sample_time_utc, "");
        assert!(!receive.includes_secondary);
        assert!(ov.lines[0].pay.is_none());
    }

    #[test]
    fn test_non_object_elements_skipped() {
        let payload = json!({
            "lines": [full_line(), 42, "Chaos Orb", null, [], {"currencyTypeName": "Exalted Orb"}],
            "currencyDetails": [{"id": 1, "name": "Chaos Orb"}, "bogus", {"name": "no id"}]
        });
        let ov = CurrencyOverview::try_from(&payload).unwrap();
        let names: Vec<&str> = ov.lines.iter().map(|l| l.currency_type_name.as_str()).collect();
        assert_eq!(names, vec!["Divine Orb", "Exalted Orb"]);
        assert_eq!(ov.currency_details.len(), 1);
        assert_eq!(ov.currency_details[0].name, "Chaos Orb");
    }

    #[test]
    fn test_wrong_field_kind_drops_only_that_line() {
        let payload = json!({
            "lines": [
                {"currencyTypeName": "Bad", "chaosEquivalent": "lots"},
                {"currencyTypeName": "Good", "chaosEquivalent": 2}
            ]
        });
        let ov = CurrencyOverview::try_from(&payload).unwrap();
        assert_eq!(ov.lines.len(), 1);
        assert_eq!(ov.lines[0].currency_type_name, "Good");
        assert_eq!(ov.lines[0].chaos_equivalent, 2.0);
    }

    #[test]
    fn test_missing_arrays_are_empty() {
        let ov = CurrencyOverview::try_from(&json!({})).unwrap();
        assert_eq!(ov, CurrencyOverview::default());

        let ov = CurrencyOverview::try_from(&json!({"lines": null, "currencyDetails": {}})).unwrap();
        assert!(ov.lines.is_empty());
        assert!(ov.currency_details.is_empty());
    }

    #[test]
    fn test_top_level_list_rejected() {
        let err = CurrencyOverview::try_from(&json!([full_line()])).unwrap_err();
        match err {
            MalformedResponse::UnexpectedShape {
                endpoint,
                expected,
                found,
            } => {
                assert_eq!(endpoint, Endpoint::CurrencyOverview);
                assert_eq!(expected, JsonShape::Object);
                assert_eq!(found, JsonShape::Array);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
