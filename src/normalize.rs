//! Normalizer entry points — untyped JSON in, typed records out.
//!
//! This is the only trust boundary between poe.ninja payloads and the domain
//! types. Every entry point checks the top-level shape strictly and fails with
//! [`MalformedResponse`] when it does not match what the endpoint guarantees.
//! Inside that envelope, elements are coerced one at a time and anything that
//! does not fit is dropped.
//!
//! ```rust,ignore
//! let overview = poe_ninja_sdk::normalize::normalize_currency_overview(&json)?;
//! let divine_id = overview.resolve_id("Divine Orb");
//! ```

use crate::domain::currency::CurrencyOverview;
use crate::domain::history::{CurrencyHistory, ItemHistory};
use crate::domain::item::ItemOverview;
use crate::error::{MalformedResponse, SdkError};
use crate::shared::json::{parse_slice, parse_text};
use crate::shared::{Endpoint, JsonShape};
use serde_json::Value;

/// A record built from exactly one endpoint's payload.
pub trait Normalize: Sized {
    /// The endpoint whose payload this type is built from.
    const ENDPOINT: Endpoint;

    fn normalize(value: &Value) -> Result<Self, MalformedResponse>;

    /// The top-level shape the payload must have.
    fn expected_shape() -> JsonShape {
        Self::ENDPOINT.expected_shape()
    }

    fn from_json_str(text: &str) -> Result<Self, MalformedResponse> {
        Self::normalize(&parse_text(text, Self::ENDPOINT)?)
    }

    fn from_json_slice(bytes: &[u8]) -> Result<Self, MalformedResponse> {
        Self::normalize(&parse_slice(bytes, Self::ENDPOINT)?)
    }
}

impl Normalize for CurrencyOverview {
    const ENDPOINT: Endpoint = Endpoint::CurrencyOverview;

    fn normalize(value: &Value) -> Result<Self, MalformedResponse> {
        Self::try_from(value)
    }
}

impl Normalize for ItemOverview {
    const ENDPOINT: Endpoint = Endpoint::ItemOverview;

    fn normalize(value: &Value) -> Result<Self, MalformedResponse> {
        Self::try_from(value)
    }
}

impl Normalize for CurrencyHistory {
    const ENDPOINT: Endpoint = Endpoint::CurrencyHistory;

    fn normalize(value: &Value) -> Result<Self, MalformedResponse> {
        Self::try_from(value)
    }
}

impl Normalize for ItemHistory {
    const ENDPOINT: Endpoint = Endpoint::ItemHistory;

    fn normalize(value: &Value) -> Result<Self, MalformedResponse> {
        Self::try_from(value)
    }
}

pub fn normalize_currency_overview(value: &Value) -> Result<CurrencyOverview, SdkError> {
    Ok(CurrencyOverview::normalize(value)?)
}

pub fn normalize_item_overview(value: &Value) -> Result<ItemOverview, SdkError> {
    Ok(ItemOverview::normalize(value)?)
}

pub fn normalize_currency_history(value: &Value) -> Result<CurrencyHistory, SdkError> {
    Ok(CurrencyHistory::normalize(value)?)
}

/// Item history is a flat list at the top level, unlike currency history.
pub fn normalize_item_history(value: &Value) -> Result<ItemHistory, SdkError> {
    Ok(ItemHistory::normalize(value)?)
}

pub fn currency_overview_from_str(text: &str) -> Result<CurrencyOverview, SdkError> {
    Ok(CurrencyOverview::from_json_str(text)?)
}

pub fn item_overview_from_str(text: &str) -> Result<ItemOverview, SdkError> {
    Ok(ItemOverview::from_json_str(text)?)
}

pub fn currency_history_from_str(text: &str) -> Result<CurrencyHistory, SdkError> {
    Ok(CurrencyHistory::from_json_str(text)?)
}

pub fn item_history_from_str(text: &str) -> Result<ItemHistory, SdkError> {
    Ok(ItemHistory::from_json_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_shapes() {
        assert_eq!(CurrencyOverview::expected_shape(), JsonShape::Object);
        assert_eq!(ItemOverview::expected_shape(), JsonShape::Object);
        assert_eq!(CurrencyHistory::expected_shape(), JsonShape::Object);
        assert_eq!(ItemHistory::expected_shape(), JsonShape::Array);
    }

    #[test]
    fn test_not_json_is_malformed() {
        let err = currency_overview_from_str("<!DOCTYPE html>").unwrap_err();
        match err {
            SdkError::Malformed(MalformedResponse::NotJson { endpoint, .. }) => {
                assert_eq!(endpoint, Endpoint::CurrencyOverview);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_slice() {
        let history = ItemHistory::from_json_slice(br#"[{"value": 2, "daysAgo": 0}]"#).unwrap();
        assert_eq!(history.len(), 1);
        assert!(ItemHistory::from_json_slice(b"{}").is_err());
    }

    #[test]
    fn test_str_entry_points() {
        assert!(item_overview_from_str(r#"{"lines": []}"#).unwrap().lines.is_empty());
        assert!(currency_history_from_str("{}").unwrap().is_empty());
        assert!(item_history_from_str("[]").unwrap().is_empty());
        assert!(item_history_from_str("{}").is_err());
    }
}
