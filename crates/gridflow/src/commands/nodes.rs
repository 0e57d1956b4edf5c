//! Node command handlers.

use std::sync::Arc;

use tabled::Tabled;

use gridflow_api::{ApiClient, schemas};
use gridflow_core::Node;

use crate::cli::{GlobalOpts, NodesArgs, NodesCommand};
use crate::error::CliError;
use crate::output::{opt, opt_display, print_output, render_list, render_single};

use super::util;

#[derive(Tabled)]
struct NodeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "TYPE")]
    node_type: String,
    #[tabled(rename = "SECTOR")]
    sector: String,
}

fn to_row(node: &schemas::Node) -> NodeRow {
    NodeRow {
        id: node.id.clone(),
        name: opt(node.name_primary_en.as_deref()).to_owned(),
        node_type: opt(node.node_type.as_deref()).to_owned(),
        sector: opt(node.sector.as_deref()).to_owned(),
    }
}

fn detail(node: &schemas::Node) -> String {
    format!(
        "ID:     {}\nName:   {}\nType:   {}\nSector: {}\nAsset:  {}",
        node.id,
        opt(node.name_primary_en.as_deref()),
        opt(node.node_type.as_deref()),
        opt(node.sector.as_deref()),
        opt_display(node.is_asset),
    )
}

fn print_node_list(data: &[schemas::Node], global: &GlobalOpts) {
    let rendered = render_list(&global.output, data, to_row, |n| n.id.clone());
    print_output(&rendered, global.quiet);
}

pub async fn handle(
    api: &Arc<ApiClient>,
    args: NodesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        NodesCommand::Get {
            ids,
            children,
            parents,
        } => {
            if ids.len() > 1 {
                if children || parents {
                    return Err(CliError::Validation {
                        field: "ids".into(),
                        reason: "--children/--parents take a single node id".into(),
                    });
                }
                let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
                let nodes = api.get_nodes(&refs, None).await?;
                print_node_list(&nodes, global);
                return Ok(());
            }

            let id = &ids[0];
            let node = Node::from_id(api, id)
                .await
                .map_err(|e| CliError::for_resource(e, "node", id))?;

            if children || parents {
                let related = if children {
                    node.children().await?
                } else {
                    node.parents().await?
                };
                let data: Vec<schemas::Node> =
                    related.iter().map(|n| n.data().clone()).collect();
                print_node_list(&data, global);
            } else {
                let rendered =
                    render_single(&global.output, node.data(), detail, |n| n.id.clone());
                print_output(&rendered, global.quiet);
            }
            Ok(())
        }

        NodesCommand::Search {
            alias,
            node_type,
            threshold,
            list,
        } => {
            let found = Node::search(
                api,
                &alias,
                threshold,
                node_type.as_deref(),
                util::page(&list),
            )
            .await?;
            let data: Vec<schemas::Node> = found.iter().map(|n| n.data().clone()).collect();
            print_node_list(&data, global);
            Ok(())
        }
    }
}
