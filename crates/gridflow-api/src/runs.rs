//! Run endpoints.
//!
//! Runs are addressed by the four-part compound slug
//! `{owner}:{model_slug}:{scenario_slug}:{run_slug}`.

use crate::client::{ApiClient, Page, Query};
use crate::error::Error;
use crate::schemas::{DeleteResponse, Run, RunCreate, RunPagination};

#[derive(Debug, Clone, Default)]
pub struct RunFilter {
    pub slug: Option<String>,
    pub model_slug: Option<String>,
    pub model_scenario_slug: Option<String>,
    pub owner: Option<String>,
    pub includes: Option<String>,
    pub featured: Option<bool>,
    pub public: Option<bool>,
    pub page: Page,
}

impl ApiClient {
    /// Fetch a run by its four-part address.
    pub async fn get_run(
        &self,
        owner: &str,
        model_slug: &str,
        scenario_slug: &str,
        run_slug: &str,
        includes: Option<&str>,
    ) -> Result<Run, Error> {
        let mut query = Query::new();
        query.push_opt("includes", includes);
        self.get(
            &format!("runs/{owner}:{model_slug}:{scenario_slug}:{run_slug}"),
            &query,
        )
        .await
    }

    /// Search runs.
    pub async fn search_runs(&self, filter: &RunFilter) -> Result<Vec<Run>, Error> {
        let mut query = Query::new();
        query
            .push_opt("slug", filter.slug.as_deref())
            .push_opt("model_slug", filter.model_slug.as_deref())
            .push_opt("model_scenario_slug", filter.model_scenario_slug.as_deref())
            .push_opt("owner", filter.owner.as_deref())
            .push_opt("includes", filter.includes.as_deref())
            .push_opt("featured", filter.featured)
            .push_opt("public", filter.public);
        filter.page.apply(&mut query);

        let resp: RunPagination = self.get("runs", &query).await?;
        Ok(resp.runs.unwrap_or_default())
    }

    /// Queue a new run.
    pub async fn create_run(&self, run: &RunCreate) -> Result<Run, Error> {
        self.post("runs", run).await
    }

    /// Delete a run.
    pub async fn delete_run(
        &self,
        owner: &str,
        model_slug: &str,
        scenario_slug: &str,
        slug: &str,
    ) -> Result<DeleteResponse, Error> {
        self.delete(&format!("runs/{owner}:{model_slug}:{scenario_slug}:{slug}"))
            .await
    }
}
