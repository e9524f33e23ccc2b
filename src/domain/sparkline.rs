//! Sparklines — the short trend series embedded inline in overview lines.

use crate::shared::serde_util::null_as_default;
use serde::{Deserialize, Serialize};

/// A short trend series as received, with its total change in percent.
///
/// Missing samples are `0.0`; the sample count always matches the source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparkLine {
    pub data: Vec<f64>,
    pub total_change: f64,
}

/// Item overviews carry the same series; `null` samples are common there.
pub type ItemSparkLine = SparkLine;

impl SparkLine {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Most recent sample, if any.
    pub fn last(&self) -> Option<f64> {
        self.data.last().copied()
    }
}

/// Raw sparkline object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparkLineResponse {
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub data: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub total_change: f64,
}

impl From<SparkLineResponse> for SparkLine {
    fn from(s: SparkLineResponse) -> Self {
        Self {
            data: s.data.into_iter().map(|v| v.unwrap_or(0.0)).collect(),
            total_change: s.total_change,
        }
    }
}
