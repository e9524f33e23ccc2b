//! HTTP client layer — `PoeNinjaHttp`, one GET per endpoint call.

pub mod client;

pub use client::PoeNinjaHttp;
