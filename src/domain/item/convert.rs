//! Conversion: item overview JSON → ItemOverview.

use super::wire;
use super::{ItemLine, ItemOverview, Modifier, UNKNOWN_ITEM_NAME};
use crate::domain::sparkline::SparkLine;
use crate::error::MalformedResponse;
use crate::shared::json::{array_field, expect_object, parse_elements};
use crate::shared::Endpoint;
use serde_json::Value;

impl From<wire::ModifierResponse> for Modifier {
    fn from(m: wire::ModifierResponse) -> Self {
        Self {
            text: m.text,
            optional: m.optional,
        }
    }
}

fn modifiers(raw: &[Value]) -> Vec<Modifier> {
    parse_elements::<wire::ModifierResponse>(raw, Endpoint::ItemOverview, "modifier")
        .into_iter()
        .map(Modifier::from)
        .collect()
}

impl From<wire::ItemLineResponse> for ItemLine {
    fn from(i: wire::ItemLineResponse) -> Self {
        Self {
            id: i.id,
            name: i
                .name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNKNOWN_ITEM_NAME.to_string()),
            icon: i.icon,
            map_tier: i.map_tier,
            level_required: i.level_required,
            base_type: i.base_type,
            stack_size: i.stack_size,
            variant: i.variant,
            prophecy_text: i.prophecy_text,
            art_filename: i.art_filename,
            links: i.links,
            item_class: i.item_class,
            sparkline: i.sparkline.map(SparkLine::from),
            low_confidence_sparkline: i.low_confidence_sparkline.map(SparkLine::from),
            implicit_modifiers: modifiers(i.implicit_modifiers.as_deref().unwrap_or_default()),
            explicit_modifiers: modifiers(i.explicit_modifiers.as_deref().unwrap_or_default()),
            flavour_text: i.flavour_text,
            corrupted: i.corrupted,
            gem_level: i.gem_level,
            gem_quality: i.gem_quality,
            item_type: i.item_type,
            chaos_value: i.chaos_value,
            divine_value: i.divine_value,
            exalted_value: i.exalted_value,
            count: i.count,
            listing_count: i.listing_count,
            details_id: i.details_id,
        }
    }
}

impl TryFrom<&Value> for ItemOverview {
    type Error = MalformedResponse;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let endpoint = Endpoint::ItemOverview;
        let envelope = expect_object(value, endpoint)?;

        let lines = parse_elements::<wire::ItemLineResponse>(
            array_field(envelope, "lines", endpoint),
            endpoint,
            "item line",
        )
        .into_iter()
        .map(ItemLine::from)
        .collect();

        Ok(Self { lines })
    }
}
