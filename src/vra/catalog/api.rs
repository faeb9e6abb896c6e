//! Catalog API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, VraError};
use crate::vra::helpers::eq_filter_query;
use crate::vra::{ContentResponse, VraClient};

use super::models::{CatalogItem, CatalogItemSummary, CatalogItemView};

impl VraClient {
    /// Resolve an entitled catalog item by exact name
    ///
    /// The name filter is evaluated server-side; the first match wins.
    /// An empty result is [`VraError::NotFound`].
    pub async fn resolve_catalog_item(&self, name: &str) -> Result<CatalogItem> {
        let url = format!(
            "{}?{}",
            self.url(api::CATALOG_ITEMS),
            eq_filter_query("name", name)
        );

        debug!("Resolving catalog item '{}' from: {}", name, url);

        let response = self.get(&url).send().await?;
        let items: ContentResponse<CatalogItemView> = self
            .parse_api_response(response, &format!("catalog item '{}'", name))
            .await?;

        let view = items
            .content
            .into_iter()
            .next()
            .ok_or_else(|| VraError::NotFound(format!("catalog item '{}'", name)))?;

        CatalogItem::try_from(view)
    }

    /// List all entitled catalog items
    pub async fn get_catalog_items(&self) -> Result<Vec<CatalogItemSummary>> {
        let url = format!(
            "{}?limit={}",
            self.url(api::CATALOG_ITEMS),
            api::PAGE_LIMIT
        );

        debug!("Fetching catalog items from: {}", url);

        let response = self.get(&url).send().await?;
        let items: ContentResponse<CatalogItemView> =
            self.parse_api_response(response, "catalog items").await?;

        debug!("Fetched {} catalog items", items.content.len());
        Ok(items.content.iter().map(CatalogItemSummary::from).collect())
    }
}
