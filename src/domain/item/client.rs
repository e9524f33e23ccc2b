//! Items sub-client.

use crate::client::PoeNinjaClient;
use crate::domain::history::ItemHistory;
use crate::domain::item::{ItemLine, ItemOverview};
use crate::error::SdkError;
use crate::normalize::Normalize;
use crate::shared::ItemCategory;

/// Sub-client for item-style categories.
pub struct Items<'a> {
    pub(crate) client: &'a PoeNinjaClient,
}

impl<'a> Items<'a> {
    pub async fn overview(&self, category: ItemCategory) -> Result<ItemOverview, SdkError> {
        let raw = self
            .client
            .http
            .get_item_overview(&self.client.league, category)
            .await?;
        Ok(ItemOverview::normalize(&raw)?)
    }

    pub async fn find_line(
        &self,
        name: &str,
        category: ItemCategory,
    ) -> Result<Option<ItemLine>, SdkError> {
        let overview = self.overview(category).await?;
        Ok(overview.find_line(name).cloned())
    }

    pub async fn resolve_id(
        &self,
        name: &str,
        category: ItemCategory,
    ) -> Result<Option<i64>, SdkError> {
        Ok(self.overview(category).await?.resolve_id(name))
    }

    pub async fn history(
        &self,
        category: ItemCategory,
        item_id: i64,
    ) -> Result<ItemHistory, SdkError> {
        let raw = self
            .client
            .http
            .get_item_history(&self.client.league, category, item_id)
            .await?;
        Ok(ItemHistory::normalize(&raw)?)
    }

    /// Overview → id → history. `Ok(None)` when the name is not listed.
    pub async fn history_by_name(
        &self,
        name: &str,
        category: ItemCategory,
    ) -> Result<Option<ItemHistory>, SdkError> {
        match self.resolve_id(name, category).await? {
            Some(id) => Ok(Some(self.history(category, id).await?)),
            None => {
                tracing::debug!(name, category = %category, "item not found");
                Ok(None)
            }
        }
    }
}
