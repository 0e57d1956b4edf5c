//! Paged asset collections.

use std::sync::Arc;

use gridflow_api::{ApiClient, AssetFilter, Error, Page, schemas};

/// A page-at-a-time view over an asset search.
///
/// Holds the accumulated assets plus the filter needed to pull the
/// next page. Exhaustion is detected by a short page.
pub struct AssetCollection {
    api: Arc<ApiClient>,
    filter: AssetFilter,
    assets: Vec<schemas::Asset>,
    exhausted: bool,
}

impl AssetCollection {
    /// Run an asset search and capture its first page.
    pub async fn search(api: &Arc<ApiClient>, filter: AssetFilter) -> Result<Self, Error> {
        let assets = api.search_assets(&filter).await?;
        let exhausted = short_page(assets.len(), filter.page.limit);
        Ok(Self {
            api: Arc::clone(api),
            filter,
            assets,
            exhausted,
        })
    }

    /// All assets under a parent node.
    pub async fn from_parent_node(api: &Arc<ApiClient>, node_id: &str) -> Result<Self, Error> {
        let filter = AssetFilter {
            node_ids: Some(vec![node_id.to_owned()]),
            ..AssetFilter::default()
        };
        Self::search(api, filter).await
    }

    /// The assets fetched so far.
    pub fn assets(&self) -> &[schemas::Asset] {
        &self.assets
    }

    /// Fetch and append the next page. Returns `false` once the search
    /// is exhausted.
    pub async fn next_page(&mut self) -> Result<bool, Error> {
        if self.exhausted {
            return Ok(false);
        }
        self.filter.page = Page {
            limit: self.filter.page.limit,
            page: self.filter.page.page + 1,
        };
        let batch = self.api.search_assets(&self.filter).await?;
        self.exhausted = short_page(batch.len(), self.filter.page.limit);
        let got_any = !batch.is_empty();
        self.assets.extend(batch);
        Ok(got_any)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// A batch smaller than the page limit means the search is exhausted.
pub(crate) fn short_page(got: usize, limit: u32) -> bool {
    usize::try_from(limit).is_ok_and(|l| got < l)
}
