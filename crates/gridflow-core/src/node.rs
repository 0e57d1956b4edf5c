//! Node domain object.
//!
//! Nodes are the fundamental building blocks of systems models:
//! administrative areas (countries, regions) or physical assets
//! (power stations, substations). They relate hierarchically to other
//! nodes; both directions load lazily on first access.

use std::fmt;
use std::sync::Arc;

use gridflow_api::{ApiClient, Error, NodeAliasFilter, Page, schemas};

use crate::asset::AssetCollection;
use crate::relation::{Relation, hydrate};

pub struct Node {
    api: Arc<ApiClient>,
    data: schemas::Node,
    children: Relation<Vec<Node>>,
    parents: Relation<Vec<Node>>,
    assets: Relation<AssetCollection>,
}

impl Node {
    pub fn new(api: Arc<ApiClient>, data: schemas::Node) -> Self {
        Self {
            api,
            data,
            children: Relation::new(),
            parents: Relation::new(),
            assets: Relation::new(),
        }
    }

    /// Load a node directly by id, e.g. `"DEU"`.
    pub async fn from_id(api: &Arc<ApiClient>, id: &str) -> Result<Self, Error> {
        let data = api.get_node(id, None).await?;
        Ok(Self::new(Arc::clone(api), data))
    }

    /// Fuzzy-search nodes by alias ("Germany", "Jawa Barat", ...).
    pub async fn search(
        api: &Arc<ApiClient>,
        alias: &str,
        threshold: f64,
        node_type: Option<&str>,
        page: Page,
    ) -> Result<Vec<Self>, Error> {
        let filter = NodeAliasFilter {
            alias: Some(alias.to_owned()),
            threshold: Some(threshold),
            node_type: node_type.map(str::to_owned),
            includes: Some("node".into()),
            sort: None,
            page,
        };
        let aliases = api.search_node_aliases(&filter).await?;
        Ok(aliases
            .into_iter()
            .filter_map(|a| a.node)
            .map(|n| Self::new(Arc::clone(api), n))
            .collect())
    }

    pub fn id(&self) -> &str {
        &self.data.id
    }

    /// The raw schema payload this node was constructed from.
    pub fn data(&self) -> &schemas::Node {
        &self.data
    }

    /// Hierarchical children of this node, fetched on first access.
    pub async fn children(&self) -> Result<&[Node], Error> {
        self.children
            .get_or_load(|| async {
                let fetched = self.api.get_node(&self.data.id, Some("children")).await?;
                let raw = fetched
                    .children
                    .ok_or(Error::MissingRelationship { field: "children" })?;
                Ok(hydrate(&self.api, raw, Node::new))
            })
            .await
            .map(Vec::as_slice)
    }

    /// Hierarchical ancestors of this node, fetched on first access.
    pub async fn parents(&self) -> Result<&[Node], Error> {
        self.parents
            .get_or_load(|| async {
                let fetched = self.api.get_node(&self.data.id, Some("parents")).await?;
                let raw = fetched
                    .parents
                    .ok_or(Error::MissingRelationship { field: "parents" })?;
                Ok(hydrate(&self.api, raw, Node::new))
            })
            .await
            .map(Vec::as_slice)
    }

    /// Assets located in (or connected to) this node.
    pub async fn assets(&self) -> Result<&AssetCollection, Error> {
        self.assets
            .get_or_load(|| AssetCollection::from_parent_node(&self.api, &self.data.id))
            .await
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node: {} (id={})",
            self.data.name_primary_en.as_deref().unwrap_or("<unnamed>"),
            self.data.id
        )
    }
}
