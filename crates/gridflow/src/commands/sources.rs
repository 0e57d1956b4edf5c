//! Source command handlers.

use std::sync::Arc;

use tabled::Tabled;

use gridflow_api::{ApiClient, SourceFilter, schemas};
use gridflow_core::Source;

use crate::cli::{GlobalOpts, SourcesArgs, SourcesCommand};
use crate::error::CliError;
use crate::output::{opt, opt_display, print_output, render_list, render_single};

use super::util;

#[derive(Tabled)]
struct SourceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "YEAR")]
    year: String,
}

fn source_id(source: &schemas::Source) -> String {
    format!("{}:{}", source.publisher_slug, source.slug)
}

fn to_row(source: &schemas::Source) -> SourceRow {
    SourceRow {
        id: source_id(source),
        name: opt(source.name.as_deref()).to_owned(),
        year: opt_display(source.year),
    }
}

fn detail(source: &schemas::Source) -> String {
    format!(
        "ID:          {}\nName:        {}\nDescription: {}\nYear:        {}",
        source_id(source),
        opt(source.name.as_deref()),
        opt(source.description.as_deref()),
        opt_display(source.year),
    )
}

pub(super) fn print_source_list(data: &[schemas::Source], global: &GlobalOpts) {
    let rendered = render_list(&global.output, data, to_row, source_id);
    print_output(&rendered, global.quiet);
}

pub async fn handle(
    api: &Arc<ApiClient>,
    args: SourcesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SourcesCommand::Get { fullslug } => {
            let source = Source::from_fullslug(api, &fullslug)
                .await
                .map_err(|e| CliError::for_resource(e, "source", &fullslug))?;
            let rendered = render_single(&global.output, source.data(), detail, source_id);
            print_output(&rendered, global.quiet);
            Ok(())
        }

        SourcesCommand::Search {
            publisher,
            slug,
            year,
            list,
        } => {
            let filter = SourceFilter {
                publisher_slug: publisher,
                slug,
                year,
                page: util::page(&list),
            };
            let found = Source::search(api, &filter).await?;
            let data: Vec<schemas::Source> = found.iter().map(|s| s.data().clone()).collect();
            print_source_list(&data, global);
            Ok(())
        }
    }
}
