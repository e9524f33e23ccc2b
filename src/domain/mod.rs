//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (fully defaulted, immutable once built)
//! - `wire.rs` — Raw serde structs matching poe.ninja responses
//! - `convert.rs` — Envelope shape checks and wire → domain conversions
//! - `client.rs` — Sub-client with HTTP methods (`http` feature)

pub mod currency;
pub mod history;
pub mod item;
pub mod lookup;
pub mod sparkline;
