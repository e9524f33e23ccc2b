//! Wire types for the history endpoints (REST).
//!
//! Only the latest observed layout is modelled:
//!
//! - `currencyhistory` → `{"receiveCurrencyGraphData": [...], "payCurrencyGraphData": [...]}`
//! - `itemhistory` → `[...]`
//!
//! Each list entry looks like `{"count": 12, "value": 180.5, "daysAgo": 0}`.

use serde::{Deserialize, Serialize};

/// Key of the receive leg in a currency history object.
pub const RECEIVE_KEY: &str = "receiveCurrencyGraphData";

/// Key of the pay leg in a currency history object.
pub const PAY_KEY: &str = "payCurrencyGraphData";

/// Raw history point. Both fields are required and strictly typed:
/// `daysAgo` must be a non-negative integer, `value` any JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPointResponse {
    #[serde(rename = "daysAgo")]
    pub days_ago: u64,
    pub value: f64,
}
