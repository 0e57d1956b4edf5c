//! Model-scenario domain object.

use std::fmt;
use std::sync::Arc;

use gridflow_api::{ApiClient, Error, ModelScenarioFilter, schemas};

use crate::model::Model;
use crate::relation::{Relation, hydrate, single};
use crate::run::Run;

/// A scenario of a model. Its id is the compound slug
/// `{owner}:{model_slug}:{slug}`.
pub struct ModelScenario {
    api: Arc<ApiClient>,
    data: schemas::ModelScenario,
    model: Relation<Model>,
    runs: Relation<Vec<Run>>,
}

impl ModelScenario {
    pub fn new(api: Arc<ApiClient>, data: schemas::ModelScenario) -> Self {
        Self {
            api,
            data,
            model: Relation::new(),
            runs: Relation::new(),
        }
    }

    /// Load a scenario from its three-part address.
    pub async fn from_slug(
        api: &Arc<ApiClient>,
        owner: &str,
        model_slug: &str,
        scenario_slug: &str,
    ) -> Result<Self, Error> {
        let data = api
            .get_model_scenario(owner, model_slug, scenario_slug, None)
            .await?;
        Ok(Self::new(Arc::clone(api), data))
    }

    /// Search scenarios.
    pub async fn search(
        api: &Arc<ApiClient>,
        filter: &ModelScenarioFilter,
    ) -> Result<Vec<Self>, Error> {
        let found = api.search_model_scenarios(filter).await?;
        Ok(hydrate(api, found, Self::new))
    }

    pub fn slug(&self) -> &str {
        &self.data.slug
    }

    /// The compound id of this scenario.
    pub fn id(&self) -> String {
        format!(
            "{}:{}:{}",
            self.data.owner, self.data.model_slug, self.data.slug
        )
    }

    pub fn data(&self) -> &schemas::ModelScenario {
        &self.data
    }

    /// The model this scenario belongs to (single-valued, loaded via
    /// the one-element-list path).
    pub async fn model(&self) -> Result<&Model, Error> {
        self.model
            .get_or_load(|| async {
                let fetched = self
                    .api
                    .get_model_scenario(
                        &self.data.owner,
                        &self.data.model_slug,
                        &self.data.slug,
                        Some("model"),
                    )
                    .await?;
                let raw = fetched
                    .model
                    .map(|m| vec![*m])
                    .ok_or(Error::MissingRelationship { field: "model" })?;
                single(hydrate(&self.api, raw, Model::new), "model")
            })
            .await
    }

    /// The runs of this scenario, fetched on first access.
    pub async fn runs(&self) -> Result<&[Run], Error> {
        self.runs
            .get_or_load(|| async {
                let fetched = self
                    .api
                    .get_model_scenario(
                        &self.data.owner,
                        &self.data.model_slug,
                        &self.data.slug,
                        Some("runs"),
                    )
                    .await?;
                let raw = fetched
                    .runs
                    .ok_or(Error::MissingRelationship { field: "runs" })?;
                Ok(hydrate(&self.api, raw, Run::new))
            })
            .await
            .map(Vec::as_slice)
    }
}

impl fmt::Display for ModelScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ModelScenario: {} (id={})",
            self.data.name.as_deref().unwrap_or(&self.data.slug),
            self.id()
        )
    }
}
