//! Asset endpoints.

use crate::client::{ApiClient, Page, Query};
use crate::error::Error;
use crate::schemas::{Asset, AssetPagination, AssetResponse};

#[derive(Debug, Clone, Default)]
pub struct AssetFilter {
    pub alias: Option<String>,
    /// Restrict results to assets under these parent nodes.
    pub node_ids: Option<Vec<String>>,
    pub sector: Option<String>,
    pub technology: Option<String>,
    pub operating_status: Option<String>,
    pub page: Page,
}

impl ApiClient {
    /// Fetch assets by id.
    pub async fn get_assets(&self, ids: &[&str]) -> Result<Vec<Asset>, Error> {
        let resp: AssetResponse = self
            .get(&format!("assets/{}", ids.join(",")), &Query::new())
            .await?;
        Ok(resp.assets)
    }

    /// Search assets.
    pub async fn search_assets(&self, filter: &AssetFilter) -> Result<Vec<Asset>, Error> {
        let mut query = Query::new();
        query
            .push_opt("alias", filter.alias.as_deref())
            .push_opt("node_ids", filter.node_ids.as_ref().map(|ids| ids.join(",")))
            .push_opt("sector", filter.sector.as_deref())
            .push_opt("technology", filter.technology.as_deref())
            .push_opt("operating_status", filter.operating_status.as_deref());
        filter.page.apply(&mut query);

        let resp: AssetPagination = self.get("assets", &query).await?;
        Ok(resp.assets.unwrap_or_default())
    }
}
