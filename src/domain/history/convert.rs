//! Conversion: history JSON → CurrencyHistory / ItemHistory.

use super::wire::{self, PAY_KEY, RECEIVE_KEY};
use super::{CurrencyHistory, HistoryPoint, ItemHistory};
use crate::error::MalformedResponse;
use crate::shared::json::{array_field, expect_array, expect_object, parse_elements};
use crate::shared::Endpoint;
use serde_json::Value;

impl From<wire::HistoryPointResponse> for HistoryPoint {
    fn from(p: wire::HistoryPointResponse) -> Self {
        Self {
            days_ago: p.days_ago,
            value: p.value,
        }
    }
}

/// Parse a list of raw history points, silently dropping invalid entries.
pub fn parse_points(items: &[Value], endpoint: Endpoint) -> Vec<HistoryPoint> {
    parse_elements::<wire::HistoryPointResponse>(items, endpoint, "history point")
        .into_iter()
        .map(HistoryPoint::from)
        .collect()
}

impl TryFrom<&Value> for CurrencyHistory {
    type Error = MalformedResponse;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let endpoint = Endpoint::CurrencyHistory;
        let envelope = expect_object(value, endpoint)?;

        let known_layout = envelope.contains_key(RECEIVE_KEY) || envelope.contains_key(PAY_KEY);
        if !known_layout && !envelope.is_empty() {
            tracing::warn!(
                endpoint = %endpoint,
                keys = ?envelope.keys().collect::<Vec<_>>(),
                "currency history matches no known layout, reading both legs as empty"
            );
        }

        Ok(Self {
            receive: parse_points(array_field(envelope, RECEIVE_KEY, endpoint), endpoint),
            pay: parse_points(array_field(envelope, PAY_KEY, endpoint), endpoint),
        })
    }
}

impl TryFrom<&Value> for ItemHistory {
    type Error = MalformedResponse;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let endpoint = Endpoint::ItemHistory;
        let points = expect_array(value, endpoint)?;
        Ok(Self {
            points: parse_points(points, endpoint),
        })
    }
}
