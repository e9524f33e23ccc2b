//! Wire types for the currency overview (REST).

use crate::domain::sparkline::SparkLineResponse;
use crate::shared::serde_util::null_as_default;
use serde::{Deserialize, Serialize};

/// Raw `pay` / `receive` trade sample. Keys are snake_case upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeDetailResponse {
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub league_id: i64,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub pay_currency_id: i64,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub get_currency_id: i64,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub sample_time_utc: String,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub count: i64,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub value: f64,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub data_point_count: i64,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub includes_secondary: bool,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub listing_count: i64,
}

/// Raw entry of the `lines` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyLineResponse {
    pub currency_type_name: Option<String>,
    pub pay: Option<TradeDetailResponse>,
    pub receive: Option<TradeDetailResponse>,
    pub pay_spark_line: Option<SparkLineResponse>,
    pub receive_spark_line: Option<SparkLineResponse>,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub chaos_equivalent: f64,
    pub low_confidence_pay_spark_line: Option<SparkLineResponse>,
    pub low_confidence_receive_spark_line: Option<SparkLineResponse>,
    pub details_id: Option<String>,
}

/// Raw entry of the `currencyDetails` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyDetailResponse {
    pub id: i64,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub trade_id: Option<String>,
}
