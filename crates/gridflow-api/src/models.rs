//! Model endpoints.
//!
//! Models are addressed by the compound path `{owner}:{model_slug}`.

use crate::client::{ApiClient, Page, Query};
use crate::error::Error;
use crate::schemas::{DeleteResponse, Model, ModelCreate, ModelPagination};

#[derive(Debug, Clone, Default)]
pub struct ModelFilter {
    pub slug: Option<String>,
    pub owner: Option<String>,
    pub includes: Option<String>,
    pub sort: Option<String>,
    pub featured: Option<bool>,
    pub public: Option<bool>,
    pub page: Page,
}

impl ApiClient {
    /// Fetch a model by owner and slug.
    pub async fn get_model(
        &self,
        owner: &str,
        model_slug: &str,
        includes: Option<&str>,
    ) -> Result<Model, Error> {
        let mut query = Query::new();
        query.push_opt("includes", includes);
        self.get(&format!("models/{owner}:{model_slug}"), &query)
            .await
    }

    /// Search models.
    pub async fn search_models(&self, filter: &ModelFilter) -> Result<Vec<Model>, Error> {
        let mut query = Query::new();
        query
            .push_opt("slug", filter.slug.as_deref())
            .push_opt("owner", filter.owner.as_deref())
            .push_opt("includes", filter.includes.as_deref())
            .push_opt("sort", filter.sort.as_deref())
            .push_opt("featured", filter.featured)
            .push_opt("public", filter.public);
        filter.page.apply(&mut query);

        let resp: ModelPagination = self.get("models", &query).await?;
        Ok(resp.models.unwrap_or_default())
    }

    /// Create a model owned by the authenticated user.
    pub async fn create_model(&self, model: &ModelCreate) -> Result<Model, Error> {
        self.post("models", model).await
    }

    /// Delete a model.
    pub async fn delete_model(&self, owner: &str, slug: &str) -> Result<DeleteResponse, Error> {
        self.delete(&format!("models/{owner}:{slug}")).await
    }
}
