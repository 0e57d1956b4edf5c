//! Source endpoints.
//!
//! Sources are addressed by `{publisher_slug}:{source_slug}`.

use crate::client::{ApiClient, Page, Query};
use crate::error::Error;
use crate::schemas::{Source, SourcePagination};

#[derive(Debug, Clone, Default)]
pub struct SourceFilter {
    pub publisher_slug: Option<String>,
    pub slug: Option<String>,
    pub year: Option<i32>,
    pub page: Page,
}

impl ApiClient {
    /// Fetch a source by its two-part address.
    pub async fn get_source(&self, publisher_slug: &str, slug: &str) -> Result<Source, Error> {
        self.get(&format!("sources/{publisher_slug}:{slug}"), &Query::new())
            .await
    }

    /// Search sources.
    pub async fn search_sources(&self, filter: &SourceFilter) -> Result<Vec<Source>, Error> {
        let mut query = Query::new();
        query
            .push_opt("publisher_slug", filter.publisher_slug.as_deref())
            .push_opt("slug", filter.slug.as_deref())
            .push_opt("year", filter.year);
        filter.page.apply(&mut query);

        let resp: SourcePagination = self.get("sources", &query).await?;
        Ok(resp.sources.unwrap_or_default())
    }
}
