//! Publisher endpoints.

use crate::client::{ApiClient, Page, Query};
use crate::error::Error;
use crate::schemas::{Publisher, PublisherPagination};

impl ApiClient {
    /// Fetch a publisher by slug.
    pub async fn get_publisher(&self, slug: &str) -> Result<Publisher, Error> {
        self.get(&format!("publishers/{slug}"), &Query::new()).await
    }

    /// Search publishers by name.
    pub async fn search_publishers(
        &self,
        name: Option<&str>,
        page: Page,
    ) -> Result<Vec<Publisher>, Error> {
        let mut query = Query::new();
        query.push_opt("name", name);
        page.apply(&mut query);

        let resp: PublisherPagination = self.get("publishers", &query).await?;
        Ok(resp.publishers.unwrap_or_default())
    }
}
