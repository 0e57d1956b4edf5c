//! Run command handlers.

use std::sync::Arc;

use tabled::Tabled;

use gridflow_api::{ApiClient, RunFilter, schemas};
use gridflow_core::{Run, parse_slug};

use crate::cli::{GlobalOpts, RunsArgs, RunsCommand};
use crate::error::CliError;
use crate::output::{opt, opt_display, print_output, render_list, render_single};

use super::util;

#[derive(Tabled)]
struct RunRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "STATUS")]
    status: String,
}

fn run_id(run: &schemas::Run) -> String {
    format!(
        "{}:{}:{}:{}",
        run.owner, run.model_slug, run.model_scenario_slug, run.slug
    )
}

fn to_row(run: &schemas::Run) -> RunRow {
    RunRow {
        id: run_id(run),
        name: opt(run.name.as_deref()).to_owned(),
        status: opt(run.status.as_deref()).to_owned(),
    }
}

fn detail(run: &schemas::Run) -> String {
    format!(
        "ID:     {}\nName:   {}\nStatus: {}\nPublic: {}",
        run_id(run),
        opt(run.name.as_deref()),
        opt(run.status.as_deref()),
        opt_display(run.public),
    )
}

pub(super) fn print_run_list(data: &[schemas::Run], global: &GlobalOpts) {
    let rendered = render_list(&global.output, data, to_row, run_id);
    print_output(&rendered, global.quiet);
}

pub async fn handle(
    api: &Arc<ApiClient>,
    args: RunsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        RunsCommand::Get { fullslug } => {
            let run = Run::from_fullslug(api, &fullslug)
                .await
                .map_err(|e| CliError::for_resource(e, "run", &fullslug))?;
            let rendered = render_single(&global.output, run.data(), detail, run_id);
            print_output(&rendered, global.quiet);
            Ok(())
        }

        RunsCommand::Search {
            owner,
            model,
            scenario,
            slug,
            featured,
            public,
            list,
        } => {
            let filter = RunFilter {
                slug,
                model_slug: model,
                model_scenario_slug: scenario,
                owner,
                featured,
                public,
                page: util::page(&list),
                ..RunFilter::default()
            };
            let found = Run::search(api, &filter).await?;
            let data: Vec<schemas::Run> = found.iter().map(|r| r.data().clone()).collect();
            print_run_list(&data, global);
            Ok(())
        }

        RunsCommand::Create {
            slug,
            model,
            scenario,
            name,
            public,
        } => {
            let created = api
                .create_run(&schemas::RunCreate {
                    slug,
                    model_slug: model,
                    model_scenario_slug: scenario,
                    name,
                    public,
                })
                .await?;
            if !global.quiet {
                eprintln!("Created run {}", run_id(&created));
            }
            Ok(())
        }

        RunsCommand::Delete { fullslug } => {
            let parts = parse_slug(&fullslug, 4)?;
            if !util::confirm(&format!("Delete run '{fullslug}'?"), global.yes)? {
                return Ok(());
            }
            api.delete_run(parts[0], parts[1], parts[2], parts[3])
                .await
                .map_err(|e| CliError::for_resource(e, "run", &fullslug))?;
            if !global.quiet {
                eprintln!("Deleted run {fullslug}");
            }
            Ok(())
        }
    }
}
