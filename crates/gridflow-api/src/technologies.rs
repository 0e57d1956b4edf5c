//! Technology endpoints.

use crate::client::{ApiClient, Page, Query};
use crate::error::Error;
use crate::schemas::{Technology, TechnologyPagination};

#[derive(Debug, Clone, Default)]
pub struct TechnologyFilter {
    pub uuid: Option<String>,
    pub slug: Option<String>,
    pub name: Option<String>,
    pub owner_id: Option<String>,
    pub includes: Option<String>,
    pub page: Page,
}

impl ApiClient {
    /// Fetch a technology by slug.
    pub async fn get_technology(
        &self,
        slug: &str,
        includes: Option<&str>,
    ) -> Result<Technology, Error> {
        let mut query = Query::new();
        query.push_opt("includes", includes);
        self.get(&format!("technologies/{slug}"), &query).await
    }

    /// Search technologies.
    pub async fn search_technologies(
        &self,
        filter: &TechnologyFilter,
    ) -> Result<Vec<Technology>, Error> {
        let mut query = Query::new();
        query
            .push_opt("uuid", filter.uuid.as_deref())
            .push_opt("slug", filter.slug.as_deref())
            .push_opt("name", filter.name.as_deref())
            .push_opt("owner_id", filter.owner_id.as_deref())
            .push_opt("includes", filter.includes.as_deref());
        filter.page.apply(&mut query);

        let resp: TechnologyPagination = self.get("technologies", &query).await?;
        Ok(resp.technologies.unwrap_or_default())
    }
}
