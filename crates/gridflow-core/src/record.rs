//! Paged record collections.

use std::sync::Arc;

use gridflow_api::{ApiClient, Error, Page, RecordFilter, schemas};

use crate::asset::short_page;

/// A page-at-a-time view over a record search.
pub struct RecordCollection {
    api: Arc<ApiClient>,
    filter: RecordFilter,
    records: Vec<schemas::Record>,
    exhausted: bool,
}

impl RecordCollection {
    /// Run a record search and capture its first page.
    pub async fn search(api: &Arc<ApiClient>, filter: RecordFilter) -> Result<Self, Error> {
        let records = api.search_records(&filter).await?;
        let exhausted = short_page(records.len(), filter.page.limit);
        Ok(Self {
            api: Arc::clone(api),
            filter,
            records,
            exhausted,
        })
    }

    /// The records fetched so far.
    pub fn records(&self) -> &[schemas::Record] {
        &self.records
    }

    /// Fetch and append the next page. Returns `false` once exhausted.
    pub async fn next_page(&mut self) -> Result<bool, Error> {
        if self.exhausted {
            return Ok(false);
        }
        self.filter.page = Page {
            limit: self.filter.page.limit,
            page: self.filter.page.page + 1,
        };
        let batch = self.api.search_records(&self.filter).await?;
        self.exhausted = short_page(batch.len(), self.filter.page.limit);
        let got_any = !batch.is_empty();
        self.records.extend(batch);
        Ok(got_any)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
