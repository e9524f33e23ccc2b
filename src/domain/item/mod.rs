//! Item domain — item overview lines and modifiers.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::domain::lookup::NameMatcher;
use crate::domain::sparkline::ItemSparkLine;
use serde::{Deserialize, Serialize};

/// Fallback for a line that carries no item name.
pub const UNKNOWN_ITEM_NAME: &str = "Unknown Item";

/// An implicit or explicit modifier line shown on the item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub text: String,
    pub optional: bool,
}

/// A single item's market snapshot.
///
/// Only `id` and `name` are always present. Every other field is independent:
/// an item may carry any subset of them depending on its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemLine {
    /// Also the id the item history endpoint takes.
    pub id: i64,
    pub name: String,
    pub icon: Option<String>,
    pub map_tier: Option<i64>,
    pub level_required: Option<i64>,
    pub base_type: Option<String>,
    pub stack_size: Option<i64>,
    pub variant: Option<String>,
    pub prophecy_text: Option<String>,
    pub art_filename: Option<String>,
    pub links: Option<i64>,
    /// Numeric frame/rarity class as sent.
    pub item_class: Option<i64>,
    pub sparkline: Option<ItemSparkLine>,
    pub low_confidence_sparkline: Option<ItemSparkLine>,
    pub implicit_modifiers: Vec<Modifier>,
    pub explicit_modifiers: Vec<Modifier>,
    pub flavour_text: Option<String>,
    pub corrupted: Option<bool>,
    pub gem_level: Option<i64>,
    pub gem_quality: Option<i64>,
    pub item_type: Option<String>,
    pub chaos_value: Option<f64>,
    pub divine_value: Option<f64>,
    pub exalted_value: Option<f64>,
    pub count: Option<i64>,
    pub listing_count: Option<i64>,
    pub details_id: Option<String>,
}

/// Normalized `itemoverview` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemOverview {
    pub lines: Vec<ItemLine>,
}

impl ItemOverview {
    /// First line whose `name` matches, ignoring case.
    pub fn find_line(&self, name: &str) -> Option<&ItemLine> {
        let matcher = NameMatcher::new(name);
        self.lines.iter().find(|line| matcher.matches(&line.name))
    }

    /// Numeric id for the history endpoint. Items carry it on the line itself.
    pub fn resolve_id(&self, name: &str) -> Option<i64> {
        self.find_line(name).map(|line| line.id)
    }
}
