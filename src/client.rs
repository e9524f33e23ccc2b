//! High-level client — `PoeNinjaClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::currency::client::Currencies;
use crate::domain::item::client::Items;
use crate::error::SdkError;
use crate::http::PoeNinjaHttp;
use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::shared::League;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::currency::client::Currencies as CurrenciesClient;
pub use crate::domain::item::client::Items as ItemsClient;

/// The primary entry point, bound to one league.
///
/// Provides nested sub-client accessors: `client.currencies()`, `client.items()`.
/// Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct PoeNinjaClient {
    pub(crate) http: PoeNinjaHttp,
    pub(crate) league: League,
}

impl PoeNinjaClient {
    pub fn builder() -> PoeNinjaClientBuilder {
        PoeNinjaClientBuilder::default()
    }

    pub fn league(&self) -> &League {
        &self.league
    }

    /// The underlying low-level client, for raw JSON access.
    pub fn http(&self) -> &PoeNinjaHttp {
        &self.http
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn currencies(&self) -> Currencies<'_> {
        Currencies { client: self }
    }

    pub fn items(&self) -> Items<'_> {
        Items { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct PoeNinjaClientBuilder {
    league: Option<League>,
    base_url: String,
    user_agent: String,
    timeout: Duration,
}

impl Default for PoeNinjaClientBuilder {
    fn default() -> Self {
        Self {
            league: None,
            base_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl PoeNinjaClientBuilder {
    pub fn league(mut self, league: impl Into<League>) -> Self {
        self.league = Some(league.into());
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fails with [`SdkError::Validation`] when no league (or a blank one) was set.
    pub fn build(self) -> Result<PoeNinjaClient, SdkError> {
        let league = match self.league {
            Some(league) if !league.is_empty() => league,
            _ => return Err(SdkError::Validation("league must not be empty".to_string())),
        };

        Ok(PoeNinjaClient {
            http: PoeNinjaHttp::new(&self.base_url, &self.user_agent, self.timeout)?,
            league,
        })
    }
}
