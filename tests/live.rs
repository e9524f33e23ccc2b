//! Smoke tests against the real poe.ninja API.
//!
//! All tests are `#[ignore]` because they require network access.
//! The league comes from `POE_NINJA_LEAGUE` (a `.env` file works too).
//!
//! Run with:
//! ```bash
//! cargo test --test live -- --ignored
//! ```

#![cfg(feature = "http")]

use poe_ninja_sdk::prelude::*;
use std::env;

fn league() -> String {
    dotenvy::dotenv().ok();
    env::var("POE_NINJA_LEAGUE").unwrap_or_else(|_| "Standard".to_string())
}

fn client() -> PoeNinjaClient {
    PoeNinjaClient::builder().league(league()).build().unwrap()
}

#[tokio::test]
#[ignore]
async fn live_currency_overview_has_divine() {
    let overview = client()
        .currencies()
        .overview(CurrencyCategory::Currency)
        .await
        .unwrap();
    println!(
        "{} lines, {} details",
        overview.lines.len(),
        overview.currency_details.len()
    );
    assert!(overview.resolve_id("Divine Orb").is_some());
}

#[tokio::test]
#[ignore]
async fn live_divine_history() {
    let history = client()
        .currencies()
        .history_by_name("Divine Orb", CurrencyCategory::Currency)
        .await
        .unwrap()
        .expect("Divine Orb should be listed");
    if let Some(point) = history.latest(Direction::Receive) {
        println!("Divine Orb: {} chaos ({} days ago)", point.value, point.days_ago);
    }
}

#[tokio::test]
#[ignore]
async fn live_item_overview() {
    let overview = client()
        .items()
        .overview(ItemCategory::DivinationCard)
        .await
        .unwrap();
    assert!(!overview.lines.is_empty());
}
