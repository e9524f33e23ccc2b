//! Category catalog — the closed sets of `type` query values poe.ninja accepts.
//!
//! Each variant maps 1:1 to the literal the upstream API expects. Parsing is
//! bit-exact: `"currency"` is not `"Currency"`.

use crate::error::InvalidCategory;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which catalog a category tag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Currency,
    Item,
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryKind::Currency => write!(f, "currency"),
            CategoryKind::Item => write!(f, "item"),
        }
    }
}

macro_rules! category_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:expr, {
            $($(#[$vmeta:meta])* $variant:ident => $lit:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $lit)] $variant,)+
        }

        impl $name {
            /// Every category, in catalog order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $lit,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = InvalidCategory;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($lit => Ok($name::$variant),)+
                    _ => Err(InvalidCategory {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl TryFrom<&str> for $name {
            type Error = InvalidCategory;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                s.parse()
            }
        }
    };
}

category_enum! {
    /// Categories served by the `currencyoverview` / `currencyhistory` endpoints.
    CurrencyCategory, CategoryKind::Currency, {
        Currency => "Currency",
        Fragment => "Fragment",
        Scarab => "Scarab",
        DeliriumOrb => "DeliriumOrb",
        Invitation => "Invitation",
        Essence => "Essence",
        Fossil => "Fossil",
        Resonator => "Resonator",
        Oil => "Oil",
        Catalyst => "Catalyst",
        Vial => "Vial",
        Incubator => "Incubator",
        Omen => "Omen",
        Tattoo => "Tattoo",
        /// Itemized corpses (Necropolis).
        Coffin => "Coffin",
    }
}

category_enum! {
    /// Categories served by the `itemoverview` / `itemhistory` endpoints.
    ItemCategory, CategoryKind::Item, {
        UniqueIdol => "UniqueIdol",
        KalguuranRune => "KalguuranRune",
        Tattoo => "Tattoo",
        Omen => "Omen",
        Artifact => "Artifact",
        Oil => "Oil",
        Incubator => "Incubator",
        UniqueTincture => "UniqueTincture",
        DeliriumOrb => "DeliriumOrb",
        Invitation => "Invitation",
        Scarab => "Scarab",
        Memory => "Memory",
        Fossil => "Fossil",
        Resonator => "Resonator",
        Essence => "Essence",
        Vial => "Vial",
        UniqueWeapon => "UniqueWeapon",
        UniqueArmour => "UniqueArmour",
        UniqueAccessory => "UniqueAccessory",
        UniqueFlask => "UniqueFlask",
        UniqueJewel => "UniqueJewel",
        UniqueRelic => "UniqueRelic",
        UniqueMap => "UniqueMap",
        SkillGem => "SkillGem",
        AwakenedGem => "AwakenedGem",
        TransfiguredGem => "TransfiguredGem",
        Map => "Map",
        BlightedMap => "BlightedMap",
        BlightRavagedMap => "BlightRavagedMap",
        Watchstone => "Watchstone",
        BaseType => "BaseType",
        HelmetEnchant => "HelmetEnchant",
        DivinationCard => "DivinationCard",
        AbyssJewel => "AbyssJewel",
        ClusterJewel => "ClusterJewel",
        Beast => "Beast",
        Potion => "Potion",
        HeistContract => "Contract",
        HeistBlueprint => "Blueprint",
        HeistTarget => "HeistTarget",
        HeistTool => "HeistTool",
        HeistCloak => "HeistCloak",
        HeistBrooch => "HeistBrooch",
        HeistGear => "HeistGear",
    }
}
