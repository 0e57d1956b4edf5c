//! Model-scenario endpoints.
//!
//! Scenarios are addressed by `{owner}:{model_slug}:{scenario_slug}`.

use crate::client::{ApiClient, Page, Query};
use crate::error::Error;
use crate::schemas::{
    DeleteResponse, ModelScenario, ModelScenarioCreate, ModelScenarioPagination,
};

#[derive(Debug, Clone, Default)]
pub struct ModelScenarioFilter {
    pub model_scenario_slug: Option<String>,
    pub model_slug: Option<String>,
    pub owner: Option<String>,
    pub includes: Option<String>,
    pub featured: Option<bool>,
    pub public: Option<bool>,
    pub page: Page,
}

impl ApiClient {
    /// Fetch a scenario by its three-part address.
    pub async fn get_model_scenario(
        &self,
        owner: &str,
        model_slug: &str,
        scenario_slug: &str,
        includes: Option<&str>,
    ) -> Result<ModelScenario, Error> {
        let mut query = Query::new();
        query.push_opt("includes", includes);
        self.get(
            &format!("model-scenarios/{owner}:{model_slug}:{scenario_slug}"),
            &query,
        )
        .await
    }

    /// Search scenarios.
    pub async fn search_model_scenarios(
        &self,
        filter: &ModelScenarioFilter,
    ) -> Result<Vec<ModelScenario>, Error> {
        let mut query = Query::new();
        query
            .push_opt("model_scenario_slug", filter.model_scenario_slug.as_deref())
            .push_opt("model_slug", filter.model_slug.as_deref())
            .push_opt("owner", filter.owner.as_deref())
            .push_opt("includes", filter.includes.as_deref())
            .push_opt("featured", filter.featured)
            .push_opt("public", filter.public);
        filter.page.apply(&mut query);

        let resp: ModelScenarioPagination = self.get("model-scenarios", &query).await?;
        Ok(resp.model_scenarios.unwrap_or_default())
    }

    /// Create a scenario under one of the caller's models.
    pub async fn create_model_scenario(
        &self,
        scenario: &ModelScenarioCreate,
    ) -> Result<ModelScenario, Error> {
        self.post("model-scenarios", scenario).await
    }

    /// Delete a scenario.
    pub async fn delete_model_scenario(
        &self,
        owner: &str,
        model_slug: &str,
        slug: &str,
    ) -> Result<DeleteResponse, Error> {
        self.delete(&format!("model-scenarios/{owner}:{model_slug}:{slug}"))
            .await
    }
}
