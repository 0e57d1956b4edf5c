//! Technology command handlers.

use std::sync::Arc;

use tabled::Tabled;

use gridflow_api::{ApiClient, TechnologyFilter, schemas};
use gridflow_core::Technology;

use crate::cli::{GlobalOpts, TechnologiesArgs, TechnologiesCommand};
use crate::error::CliError;
use crate::output::{opt, print_output, render_list, render_single};

use super::util;

#[derive(Tabled)]
struct TechnologyRow {
    #[tabled(rename = "SLUG")]
    slug: String,
    #[tabled(rename = "NAME")]
    name: String,
}

fn to_row(tech: &schemas::Technology) -> TechnologyRow {
    TechnologyRow {
        slug: tech.slug.clone(),
        name: opt(tech.name.as_deref()).to_owned(),
    }
}

fn detail(tech: &schemas::Technology) -> String {
    format!(
        "Slug: {}\nName: {}",
        tech.slug,
        opt(tech.name.as_deref()),
    )
}

fn print_tech_list(data: &[schemas::Technology], global: &GlobalOpts) {
    let rendered = render_list(&global.output, data, to_row, |t| t.slug.clone());
    print_output(&rendered, global.quiet);
}

pub async fn handle(
    api: &Arc<ApiClient>,
    args: TechnologiesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        TechnologiesCommand::Get {
            slug,
            children,
            parents,
        } => {
            let tech = Technology::from_slug(api, &slug)
                .await
                .map_err(|e| CliError::for_resource(e, "technology", &slug))?;

            if children || parents {
                let related = if children {
                    tech.children().await?
                } else {
                    tech.parents().await?
                };
                let data: Vec<schemas::Technology> =
                    related.iter().map(|t| t.data().clone()).collect();
                print_tech_list(&data, global);
            } else {
                let rendered =
                    render_single(&global.output, tech.data(), detail, |t| t.slug.clone());
                print_output(&rendered, global.quiet);
            }
            Ok(())
        }

        TechnologiesCommand::Search { slug, name, list } => {
            let filter = TechnologyFilter {
                slug,
                name,
                page: util::page(&list),
                ..TechnologyFilter::default()
            };
            let found = Technology::search(api, &filter).await?;
            let data: Vec<schemas::Technology> =
                found.iter().map(|t| t.data().clone()).collect();
            print_tech_list(&data, global);
            Ok(())
        }
    }
}
