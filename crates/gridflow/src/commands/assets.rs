//! Asset command handlers.

use std::sync::Arc;

use tabled::Tabled;

use gridflow_api::{ApiClient, AssetFilter, schemas};
use gridflow_core::AssetCollection;

use crate::cli::{AssetsArgs, AssetsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output::{opt, print_output, render_list};

use super::util;

#[derive(Tabled)]
struct AssetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "TECHNOLOGY")]
    technology: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "CAPACITY")]
    capacity: String,
}

fn to_row(asset: &schemas::Asset) -> AssetRow {
    let capacity = match (asset.capacity, asset.capacity_unit.as_deref()) {
        (Some(value), Some(unit)) => format!("{value} {unit}"),
        (Some(value), None) => value.to_string(),
        _ => "-".into(),
    };
    AssetRow {
        id: asset.id.clone(),
        name: opt(asset.name_primary_en.as_deref()).to_owned(),
        technology: opt(asset.technology.as_deref()).to_owned(),
        status: opt(asset.operating_status.as_deref()).to_owned(),
        capacity,
    }
}

fn print_asset_list(data: &[schemas::Asset], global: &GlobalOpts) {
    let rendered = render_list(&global.output, data, to_row, |a| a.id.clone());
    print_output(&rendered, global.quiet);
}

pub async fn handle(
    api: &Arc<ApiClient>,
    args: AssetsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AssetsCommand::Get { ids } => {
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            let assets = api.get_assets(&refs).await?;
            print_asset_list(&assets, global);
            Ok(())
        }

        AssetsCommand::Search {
            alias,
            node_ids,
            sector,
            technology,
            operating_status,
            list,
        } => {
            let filter = AssetFilter {
                alias,
                node_ids: if node_ids.is_empty() {
                    None
                } else {
                    Some(node_ids)
                },
                sector,
                technology,
                operating_status,
                page: util::page(&list),
            };
            let collection = AssetCollection::search(api, filter).await?;
            print_asset_list(collection.assets(), global);
            Ok(())
        }
    }
}
