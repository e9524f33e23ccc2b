//! # poe.ninja SDK
//!
//! A typed Rust client for the poe.ninja price-aggregation API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Category catalog, domain models, normalization, lookups (no I/O)
//! 2. **HTTP API** — `PoeNinjaHttp`, one GET per endpoint call
//! 3. **High-Level Client** — `PoeNinjaClient` bound to a league, with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use poe_ninja_sdk::prelude::*;
//!
//! let client = PoeNinjaClient::builder().league("Settlers").build()?;
//!
//! let overview = client.currencies().overview(CurrencyCategory::Currency).await?;
//! let divine = overview.find_line("divine orb");
//! let history = client
//!     .currencies()
//!     .history_by_name("Divine Orb", CurrencyCategory::Currency)
//!     .await?;
//! ```
//!
//! Payloads fetched some other way go straight through the normalizer:
//!
//! ```rust,ignore
//! let overview = poe_ninja_sdk::normalize::currency_overview_from_str(&body)?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and the category catalog.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, lookups.
pub mod domain;

/// JSON → domain entry points.
pub mod normalize;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `PoeNinjaClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + catalog
    pub use crate::shared::{
        CategoryKind, CurrencyCategory, Endpoint, ItemCategory, JsonShape, League,
    };

    // Domain types — currency
    pub use crate::domain::currency::{
        CurrencyDetail, CurrencyLine, CurrencyOverview, TradeDetail,
    };

    // Domain types — item
    pub use crate::domain::item::{ItemLine, ItemOverview, Modifier};

    // Domain types — history, sparklines
    pub use crate::domain::history::{CurrencyHistory, Direction, HistoryPoint, ItemHistory};
    pub use crate::domain::sparkline::{ItemSparkLine, SparkLine};

    // Lookups + normalizer
    pub use crate::domain::lookup::{
        find_currency_line_by_name, find_item_line_by_name, resolve_currency_id, resolve_item_id,
    };
    pub use crate::normalize::Normalize;

    // Errors
    pub use crate::error::{InvalidCategory, MalformedResponse, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{CurrenciesClient, ItemsClient, PoeNinjaClient, PoeNinjaClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::error::HttpError;
}
