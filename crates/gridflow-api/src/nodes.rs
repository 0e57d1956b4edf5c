//! Node endpoints.
//!
//! Nodes are fetched by id (comma-joined for batches); fuzzy search
//! goes through the node-alias endpoints in [`crate::node_aliases`].

use crate::client::{ApiClient, Query};
use crate::error::Error;
use crate::schemas::{Node, NodeResponse};

impl ApiClient {
    /// Fetch one or more nodes by id.
    ///
    /// `includes` requests related resources inline, e.g. `"children"`
    /// or `"parents"`.
    pub async fn get_nodes(
        &self,
        ids: &[&str],
        includes: Option<&str>,
    ) -> Result<Vec<Node>, Error> {
        let mut query = Query::new();
        query.push_opt("includes", includes);

        let resp: NodeResponse = self
            .get(&format!("nodes/{}", ids.join(",")), &query)
            .await?;
        Ok(resp.nodes)
    }

    /// Fetch a single node by id.
    pub async fn get_node(&self, id: &str, includes: Option<&str>) -> Result<Node, Error> {
        let mut nodes = self.get_nodes(&[id], includes).await?;
        if nodes.is_empty() {
            return Err(Error::Api {
                status: 404,
                message: format!("node '{id}' not found"),
            });
        }
        Ok(nodes.remove(0))
    }
}
