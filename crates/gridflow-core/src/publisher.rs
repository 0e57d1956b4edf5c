//! Publisher and source domain objects.

use std::fmt;
use std::sync::Arc;

use gridflow_api::{ApiClient, Error, Page, SourceFilter, schemas};

use crate::relation::{Relation, hydrate};
use crate::slug::parse_slug;

/// A third party publishing data relevant to the energy transition.
pub struct Publisher {
    api: Arc<ApiClient>,
    data: schemas::Publisher,
    sources: Relation<Vec<Source>>,
}

impl Publisher {
    pub fn new(api: Arc<ApiClient>, data: schemas::Publisher) -> Self {
        Self {
            api,
            data,
            sources: Relation::new(),
        }
    }

    /// Load a publisher by slug.
    pub async fn from_slug(api: &Arc<ApiClient>, slug: &str) -> Result<Self, Error> {
        let data = api.get_publisher(slug).await?;
        Ok(Self::new(Arc::clone(api), data))
    }

    /// Search publishers by name.
    pub async fn search(api: &Arc<ApiClient>, name: Option<&str>) -> Result<Vec<Self>, Error> {
        let found = api.search_publishers(name, Page::default()).await?;
        Ok(hydrate(api, found, Self::new))
    }

    pub fn slug(&self) -> &str {
        &self.data.slug
    }

    pub fn data(&self) -> &schemas::Publisher {
        &self.data
    }

    /// Sources made available by this publisher, fetched on first access.
    pub async fn sources(&self) -> Result<&[Source], Error> {
        self.sources
            .get_or_load(|| async {
                let filter = SourceFilter {
                    publisher_slug: Some(self.data.slug.clone()),
                    ..SourceFilter::default()
                };
                let raw = self.api.search_sources(&filter).await?;
                Ok(hydrate(&self.api, raw, Source::new))
            })
            .await
            .map(Vec::as_slice)
    }
}

impl fmt::Display for Publisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Publisher: {} (id={})",
            self.data.name.as_deref().unwrap_or(&self.data.slug),
            self.data.slug
        )
    }
}

/// A dataset release, addressed by `{publisher_slug}:{source_slug}`.
pub struct Source {
    #[allow(dead_code)]
    api: Arc<ApiClient>,
    data: schemas::Source,
}

impl Source {
    pub fn new(api: Arc<ApiClient>, data: schemas::Source) -> Self {
        Self { api, data }
    }

    /// Load a source from its two-part compound slug.
    pub async fn from_fullslug(api: &Arc<ApiClient>, fullslug: &str) -> Result<Self, Error> {
        let parts = parse_slug(fullslug, 2)?;
        let data = api.get_source(parts[0], parts[1]).await?;
        Ok(Self::new(Arc::clone(api), data))
    }

    /// Search sources.
    pub async fn search(api: &Arc<ApiClient>, filter: &SourceFilter) -> Result<Vec<Self>, Error> {
        let found = api.search_sources(filter).await?;
        Ok(hydrate(api, found, Self::new))
    }

    pub fn slug(&self) -> &str {
        &self.data.slug
    }

    /// The compound id of this source.
    pub fn id(&self) -> String {
        format!("{}:{}", self.data.publisher_slug, self.data.slug)
    }

    pub fn data(&self) -> &schemas::Source {
        &self.data
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Source: {} (id={})",
            self.data.name.as_deref().unwrap_or(&self.data.slug),
            self.id()
        )
    }
}
