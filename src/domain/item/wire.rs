//! Wire types for the item overview (REST).
//!
//! Item shape depends on the category: maps carry `mapTier`, gems carry
//! `gemLevel` / `gemQuality`, uniques carry `links`, and so on. Everything
//! except `id` is optional.

use crate::domain::sparkline::SparkLineResponse;
use crate::shared::serde_util::{lenient_option, null_as_default};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw entry of the `lines` array.
///
/// Only `id` is required. Every other field is coerced on its own: a value of
/// the wrong kind reads as absent and the rest of the line is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemLineResponse {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub map_tier: Option<i64>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub level_required: Option<i64>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub base_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub stack_size: Option<i64>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub variant: Option<String>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub prophecy_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub art_filename: Option<String>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub links: Option<i64>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub item_class: Option<i64>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub sparkline: Option<SparkLineResponse>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub low_confidence_sparkline: Option<SparkLineResponse>,
    /// Kept untyped here; entries are coerced one by one during conversion.
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub implicit_modifiers: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub explicit_modifiers: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub flavour_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub corrupted: Option<bool>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub gem_level: Option<i64>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub gem_quality: Option<i64>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub item_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub chaos_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub divine_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub exalted_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub count: Option<i64>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub listing_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient_option::deserialize")]
    pub details_id: Option<String>,
}

/// Raw implicit/explicit modifier entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModifierResponse {
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub optional: bool,
}
