//! Model domain object.

use std::fmt;
use std::sync::Arc;

use gridflow_api::{ApiClient, Error, ModelFilter, schemas};

use crate::model_scenario::ModelScenario;
use crate::relation::{Relation, hydrate};

/// A systems model, the top of the model → scenario → run hierarchy.
pub struct Model {
    api: Arc<ApiClient>,
    data: schemas::Model,
    model_scenarios: Relation<Vec<ModelScenario>>,
}

impl Model {
    pub fn new(api: Arc<ApiClient>, data: schemas::Model) -> Self {
        Self {
            api,
            data,
            model_scenarios: Relation::new(),
        }
    }

    /// Load a model from its owner and slug, e.g. `("alice", "global-power")`.
    pub async fn from_slug(
        api: &Arc<ApiClient>,
        owner: &str,
        model_slug: &str,
    ) -> Result<Self, Error> {
        let data = api.get_model(owner, model_slug, None).await?;
        Ok(Self::new(Arc::clone(api), data))
    }

    /// Search models.
    pub async fn search(api: &Arc<ApiClient>, filter: &ModelFilter) -> Result<Vec<Self>, Error> {
        let found = api.search_models(filter).await?;
        Ok(hydrate(api, found, Self::new))
    }

    pub fn slug(&self) -> &str {
        &self.data.slug
    }

    pub fn owner(&self) -> &str {
        &self.data.owner
    }

    pub fn data(&self) -> &schemas::Model {
        &self.data
    }

    /// The scenarios belonging to this model, fetched on first access.
    pub async fn model_scenarios(&self) -> Result<&[ModelScenario], Error> {
        self.model_scenarios
            .get_or_load(|| async {
                let fetched = self
                    .api
                    .get_model(&self.data.owner, &self.data.slug, Some("model_scenarios"))
                    .await?;
                let raw = fetched.model_scenarios.ok_or(Error::MissingRelationship {
                    field: "model_scenarios",
                })?;
                Ok(hydrate(&self.api, raw, ModelScenario::new))
            })
            .await
            .map(Vec::as_slice)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Model: {} (id={})",
            self.data.name.as_deref().unwrap_or(&self.data.slug),
            self.data.slug
        )
    }
}
