//! Node-alias endpoints: fuzzy node search and primary-name lookup.

use crate::client::{ApiClient, Page, Query};
use crate::error::Error;
use crate::schemas::{NodeAlias, NodeAliasPagination};

/// Filters for alias search. `includes = Some("node")` inlines the
/// aliased node into each result.
#[derive(Debug, Clone, Default)]
pub struct NodeAliasFilter {
    pub alias: Option<String>,
    pub threshold: Option<f64>,
    pub node_type: Option<String>,
    pub includes: Option<String>,
    pub sort: Option<String>,
    pub page: Page,
}

impl ApiClient {
    /// Search node aliases.
    pub async fn search_node_aliases(
        &self,
        filter: &NodeAliasFilter,
    ) -> Result<Vec<NodeAlias>, Error> {
        let mut query = Query::new();
        query
            .push_opt("alias", filter.alias.as_deref())
            .push_opt("threshold", filter.threshold)
            .push_opt("node_type", filter.node_type.as_deref())
            .push_opt("includes", filter.includes.as_deref())
            .push_opt("sort", filter.sort.as_deref());
        filter.page.apply(&mut query);

        let resp: NodeAliasPagination = self.get("node-aliases", &query).await?;
        Ok(resp.node_aliases.unwrap_or_default())
    }

    /// The primary (display) alias of a node.
    pub async fn get_primary_node_alias(&self, node_slug: &str) -> Result<NodeAlias, Error> {
        let mut query = Query::new();
        query
            .push("slug", node_slug)
            .push("primary", true)
            .push("limit", 1);

        let resp: NodeAliasPagination = self.get("node-aliases", &query).await?;
        resp.node_aliases
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| Error::Api {
                status: 404,
                message: format!("no primary alias for node '{node_slug}'"),
            })
    }
}
