//! Publisher command handlers.

use std::sync::Arc;

use tabled::Tabled;

use gridflow_api::{ApiClient, schemas};
use gridflow_core::Publisher;

use crate::cli::{GlobalOpts, PublishersArgs, PublishersCommand};
use crate::error::CliError;
use crate::output::{opt, print_output, render_list, render_single};

use super::sources::print_source_list;
use super::util;

#[derive(Tabled)]
struct PublisherRow {
    #[tabled(rename = "SLUG")]
    slug: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "TYPE")]
    organisation_type: String,
}

fn to_row(publisher: &schemas::Publisher) -> PublisherRow {
    PublisherRow {
        slug: publisher.slug.clone(),
        name: opt(publisher.name.as_deref()).to_owned(),
        organisation_type: opt(publisher.organisation_type.as_deref()).to_owned(),
    }
}

fn detail(publisher: &schemas::Publisher) -> String {
    format!(
        "Slug: {}\nName: {}\nType: {}\nURL:  {}",
        publisher.slug,
        opt(publisher.name.as_deref()),
        opt(publisher.organisation_type.as_deref()),
        opt(publisher.url.as_deref()),
    )
}

pub async fn handle(
    api: &Arc<ApiClient>,
    args: PublishersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        PublishersCommand::Get { slug, sources } => {
            let publisher = Publisher::from_slug(api, &slug)
                .await
                .map_err(|e| CliError::for_resource(e, "publisher", &slug))?;

            if sources {
                let found = publisher.sources().await?;
                let data: Vec<schemas::Source> =
                    found.iter().map(|s| s.data().clone()).collect();
                print_source_list(&data, global);
            } else {
                let rendered =
                    render_single(&global.output, publisher.data(), detail, |p| p.slug.clone());
                print_output(&rendered, global.quiet);
            }
            Ok(())
        }

        PublishersCommand::Search { name, list } => {
            let found = api
                .search_publishers(name.as_deref(), util::page(&list))
                .await?;
            let rendered = render_list(&global.output, &found, to_row, |p| p.slug.clone());
            print_output(&rendered, global.quiet);
            Ok(())
        }
    }
}
