//! Low-level HTTP client — `PoeNinjaHttp`.
//!
//! One method per API endpoint. Returns the raw JSON document (normalization to
//! domain types happens at the high-level client boundary). A call is a single
//! attempt: nothing is retried, cached or throttled here.

use crate::error::{HttpError, SdkError};
use crate::network::endpoint_url;
use crate::shared::json::parse_slice;
use crate::shared::{CurrencyCategory, Endpoint, ItemCategory, League};

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Low-level HTTP client for the poe.ninja data API.
#[derive(Debug, Clone)]
pub struct PoeNinjaHttp {
    base_url: String,
    client: Client,
}

impl PoeNinjaHttp {
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Overviews ────────────────────────────────────────────────────────

    pub async fn get_currency_overview(
        &self,
        league: &League,
        category: CurrencyCategory,
    ) -> Result<Value, SdkError> {
        let endpoint = Endpoint::CurrencyOverview;
        let url = endpoint_url(&self.base_url, endpoint, league, category.as_str(), None);
        self.get(&url, endpoint).await
    }

    pub async fn get_item_overview(
        &self,
        league: &League,
        category: ItemCategory,
    ) -> Result<Value, SdkError> {
        let endpoint = Endpoint::ItemOverview;
        let url = endpoint_url(&self.base_url, endpoint, league, category.as_str(), None);
        self.get(&url, endpoint).await
    }

    // ── History ──────────────────────────────────────────────────────────

    pub async fn get_currency_history(
        &self,
        league: &League,
        category: CurrencyCategory,
        currency_id: i64,
    ) -> Result<Value, SdkError> {
        let endpoint = Endpoint::CurrencyHistory;
        let url = endpoint_url(
            &self.base_url,
            endpoint,
            league,
            category.as_str(),
            Some(("currencyId", currency_id)),
        );
        self.get(&url, endpoint).await
    }

    pub async fn get_item_history(
        &self,
        league: &League,
        category: ItemCategory,
        item_id: i64,
    ) -> Result<Value, SdkError> {
        let endpoint = Endpoint::ItemHistory;
        let url = endpoint_url(
            &self.base_url,
            endpoint,
            league,
            category.as_str(),
            Some(("itemId", item_id)),
        );
        self.get(&url, endpoint).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get(&self, url: &str, endpoint: Endpoint) -> Result<Value, SdkError> {
        tracing::debug!(endpoint = %endpoint, "GET {}", url);

        let resp = self.client.get(url).send().await.map_err(HttpError::from)?;
        let status = resp.status();

        if status.is_success() {
            let body = resp.bytes().await.map_err(HttpError::from)?;
            return Ok(parse_slice(&body, endpoint)?);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        tracing::debug!(endpoint = %endpoint, status = status_code, "request failed");
        Err(classify_status(status_code, body_text).into())
    }
}

fn classify_status(status: u16, body: String) -> HttpError {
    match status {
        404 => HttpError::NotFound(body),
        400..=499 => HttpError::BadRequest { status, body },
        _ => HttpError::ServerError { status, body },
    }
}
