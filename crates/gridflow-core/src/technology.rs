//! Technology domain object.

use std::fmt;
use std::sync::Arc;

use gridflow_api::{ApiClient, Error, RecordFilter, TechnologyFilter, schemas};

use crate::record::RecordCollection;
use crate::relation::{Relation, hydrate};

/// A technology, related hierarchically to other technologies via its
/// parents and children.
pub struct Technology {
    api: Arc<ApiClient>,
    data: schemas::Technology,
    children: Relation<Vec<Technology>>,
    parents: Relation<Vec<Technology>>,
    projections: Relation<RecordCollection>,
}

impl Technology {
    pub fn new(api: Arc<ApiClient>, data: schemas::Technology) -> Self {
        Self {
            api,
            data,
            children: Relation::new(),
            parents: Relation::new(),
            projections: Relation::new(),
        }
    }

    /// Load a technology by slug, e.g. `"coal"`.
    pub async fn from_slug(api: &Arc<ApiClient>, slug: &str) -> Result<Self, Error> {
        let data = api.get_technology(slug, None).await?;
        Ok(Self::new(Arc::clone(api), data))
    }

    /// Search technologies.
    pub async fn search(
        api: &Arc<ApiClient>,
        filter: &TechnologyFilter,
    ) -> Result<Vec<Self>, Error> {
        let found = api.search_technologies(filter).await?;
        Ok(hydrate(api, found, Self::new))
    }

    pub fn slug(&self) -> &str {
        &self.data.slug
    }

    pub fn data(&self) -> &schemas::Technology {
        &self.data
    }

    /// Child technologies, fetched on first access.
    pub async fn children(&self) -> Result<&[Technology], Error> {
        self.children
            .get_or_load(|| async {
                let fetched = self
                    .api
                    .get_technology(&self.data.slug, Some("children"))
                    .await?;
                let raw = fetched
                    .children
                    .ok_or(Error::MissingRelationship { field: "children" })?;
                Ok(hydrate(&self.api, raw, Technology::new))
            })
            .await
            .map(Vec::as_slice)
    }

    /// Parent technologies, fetched on first access.
    pub async fn parents(&self) -> Result<&[Technology], Error> {
        self.parents
            .get_or_load(|| async {
                let fetched = self
                    .api
                    .get_technology(&self.data.slug, Some("parents"))
                    .await?;
                let raw = fetched
                    .parents
                    .ok_or(Error::MissingRelationship { field: "parents" })?;
                Ok(hydrate(&self.api, raw, Technology::new))
            })
            .await
            .map(Vec::as_slice)
    }

    /// Records projected for this technology.
    pub async fn projections(&self) -> Result<&RecordCollection, Error> {
        self.projections
            .get_or_load(|| {
                let filter = RecordFilter {
                    technology: Some(self.data.slug.clone()),
                    ..RecordFilter::default()
                };
                RecordCollection::search(&self.api, filter)
            })
            .await
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Technology: {} (slug={})",
            self.data.name.as_deref().unwrap_or(&self.data.slug),
            self.data.slug
        )
    }
}
