//! Run domain object.

use std::fmt;
use std::sync::Arc;

use gridflow_api::{ApiClient, Error, RunFilter, schemas};

use crate::model_scenario::ModelScenario;
use crate::relation::{Relation, hydrate, single};
use crate::slug::parse_slug;

/// A solved instance of a model scenario, addressed by the compound
/// slug `{owner}:{model_slug}:{scenario_slug}:{run_slug}`.
pub struct Run {
    api: Arc<ApiClient>,
    data: schemas::Run,
    model_scenario: Relation<ModelScenario>,
}

impl Run {
    pub fn new(api: Arc<ApiClient>, data: schemas::Run) -> Self {
        Self {
            api,
            data,
            model_scenario: Relation::new(),
        }
    }

    /// Load a run from its four-part compound slug.
    pub async fn from_fullslug(api: &Arc<ApiClient>, fullslug: &str) -> Result<Self, Error> {
        let parts = parse_slug(fullslug, 4)?;
        let data = api
            .get_run(parts[0], parts[1], parts[2], parts[3], None)
            .await?;
        Ok(Self::new(Arc::clone(api), data))
    }

    /// Search runs.
    pub async fn search(api: &Arc<ApiClient>, filter: &RunFilter) -> Result<Vec<Self>, Error> {
        let found = api.search_runs(filter).await?;
        Ok(hydrate(api, found, Self::new))
    }

    pub fn slug(&self) -> &str {
        &self.data.slug
    }

    /// The compound id of this run.
    pub fn fullslug(&self) -> String {
        format!(
            "{}:{}:{}:{}",
            self.data.owner, self.data.model_slug, self.data.model_scenario_slug, self.data.slug
        )
    }

    pub fn data(&self) -> &schemas::Run {
        &self.data
    }

    /// The scenario this run belongs to (single-valued, loaded via the
    /// one-element-list path).
    pub async fn model_scenario(&self) -> Result<&ModelScenario, Error> {
        self.model_scenario
            .get_or_load(|| async {
                let fetched = self
                    .api
                    .get_run(
                        &self.data.owner,
                        &self.data.model_slug,
                        &self.data.model_scenario_slug,
                        &self.data.slug,
                        Some("model_scenario"),
                    )
                    .await?;
                let raw = fetched
                    .model_scenario
                    .map(|s| vec![*s])
                    .ok_or(Error::MissingRelationship {
                        field: "model_scenario",
                    })?;
                single(
                    hydrate(&self.api, raw, ModelScenario::new),
                    "model_scenario",
                )
            })
            .await
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Run: {} (fullslug={})",
            self.data.name.as_deref().unwrap_or(&self.data.slug),
            self.fullslug()
        )
    }
}
