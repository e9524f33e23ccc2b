//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format poe.ninja uses, so they can be used directly in wire types
//! and query strings without conversion.

pub mod category;
pub mod json;
pub mod serde_util;

pub use category::{CategoryKind, CurrencyCategory, ItemCategory};

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─── League ──────────────────────────────────────────────────────────────────

/// Newtype for league names (e.g. `"Settlers"`, `"Standard"`).
///
/// Every query is scoped to a league; the name is passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct League(String);

impl League {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for League {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for League {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for League {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ─── Endpoint ────────────────────────────────────────────────────────────────

/// The upstream endpoints whose payloads this crate normalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    CurrencyOverview,
    ItemOverview,
    CurrencyHistory,
    ItemHistory,
}

impl Endpoint {
    /// Path segment under the API base URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CurrencyOverview => "currencyoverview",
            Self::ItemOverview => "itemoverview",
            Self::CurrencyHistory => "currencyhistory",
            Self::ItemHistory => "itemhistory",
        }
    }

    /// Top-level JSON shape the endpoint guarantees.
    ///
    /// Item history is a flat list; everything else is an envelope object.
    pub fn expected_shape(&self) -> JsonShape {
        match self {
            Self::ItemHistory => JsonShape::Array,
            _ => JsonShape::Object,
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── JsonShape ───────────────────────────────────────────────────────────────

/// The kind of a JSON value, used for shape checks and error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonShape {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl JsonShape {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Bool,
            Value::Null => Self::Null,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "boolean",
            Self::Null => "null",
        }
    }
}

impl std::fmt::Display for JsonShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
