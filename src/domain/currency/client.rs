//! Currencies sub-client — overviews, lookups, history.

use crate::client::PoeNinjaClient;
use crate::domain::currency::{CurrencyLine, CurrencyOverview};
use crate::domain::history::CurrencyHistory;
use crate::error::SdkError;
use crate::normalize::Normalize;
use crate::shared::CurrencyCategory;

/// Sub-client for currency-style categories.
pub struct Currencies<'a> {
    pub(crate) client: &'a PoeNinjaClient,
}

impl<'a> Currencies<'a> {
    /// Fetch and normalize the overview for one category in the client's league.
    pub async fn overview(&self, category: CurrencyCategory) -> Result<CurrencyOverview, SdkError> {
        let raw = self
            .client
            .http
            .get_currency_overview(&self.client.league, category)
            .await?;
        Ok(CurrencyOverview::normalize(&raw)?)
    }

    /// Fetch the overview and return the first line named `name` (case-insensitive).
    pub async fn find_line(
        &self,
        name: &str,
        category: CurrencyCategory,
    ) -> Result<Option<CurrencyLine>, SdkError> {
        let overview = self.overview(category).await?;
        Ok(overview.find_line(name).cloned())
    }

    pub async fn resolve_id(
        &self,
        name: &str,
        category: CurrencyCategory,
    ) -> Result<Option<i64>, SdkError> {
        let overview = self.overview(category).await?;
        Ok(overview.resolve_id(name))
    }

    pub async fn history(
        &self,
        category: CurrencyCategory,
        currency_id: i64,
    ) -> Result<CurrencyHistory, SdkError> {
        let raw = self
            .client
            .http
            .get_currency_history(&self.client.league, category, currency_id)
            .await?;
        Ok(CurrencyHistory::normalize(&raw)?)
    }

    /// Overview → id → history. `Ok(None)` when the name is not in the catalog.
    pub async fn history_by_name(
        &self,
        name: &str,
        category: CurrencyCategory,
    ) -> Result<Option<CurrencyHistory>, SdkError> {
        let Some(id) = self.resolve_id(name, category).await? else {
            tracing::debug!(name, category = %category, "currency not found");
            return Ok(None);
        };
        Ok(Some(self.history(category, id).await?))
    }
}
