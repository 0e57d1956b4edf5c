//! Model scenario command handlers.

use std::sync::Arc;

use tabled::Tabled;

use gridflow_api::{ApiClient, ModelScenarioFilter, schemas};
use gridflow_core::{ModelScenario, parse_slug};

use crate::cli::{GlobalOpts, ScenariosArgs, ScenariosCommand};
use crate::error::CliError;
use crate::output::{opt, opt_display, print_output, render_list, render_single};

use super::runs::print_run_list;
use super::util;

#[derive(Tabled)]
struct ScenarioRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "PUBLIC")]
    public: String,
}

fn scenario_id(scenario: &schemas::ModelScenario) -> String {
    format!(
        "{}:{}:{}",
        scenario.owner, scenario.model_slug, scenario.slug
    )
}

fn to_row(scenario: &schemas::ModelScenario) -> ScenarioRow {
    ScenarioRow {
        id: scenario_id(scenario),
        name: opt(scenario.name.as_deref()).to_owned(),
        public: opt_display(scenario.public),
    }
}

fn detail(scenario: &schemas::ModelScenario) -> String {
    format!(
        "ID:          {}\nName:        {}\nDescription: {}\nPublic:      {}",
        scenario_id(scenario),
        opt(scenario.name.as_deref()),
        opt(scenario.description.as_deref()),
        opt_display(scenario.public),
    )
}

pub(super) fn print_scenario_list(data: &[schemas::ModelScenario], global: &GlobalOpts) {
    let rendered = render_list(&global.output, data, to_row, scenario_id);
    print_output(&rendered, global.quiet);
}

pub async fn handle(
    api: &Arc<ApiClient>,
    args: ScenariosArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ScenariosCommand::Get { fullslug, runs } => {
            let parts = parse_slug(&fullslug, 3)?;
            let scenario = ModelScenario::from_slug(api, parts[0], parts[1], parts[2])
                .await
                .map_err(|e| CliError::for_resource(e, "scenario", &fullslug))?;

            if runs {
                let found = scenario.runs().await?;
                let data: Vec<schemas::Run> = found.iter().map(|r| r.data().clone()).collect();
                print_run_list(&data, global);
            } else {
                let rendered = render_single(&global.output, scenario.data(), detail, scenario_id);
                print_output(&rendered, global.quiet);
            }
            Ok(())
        }

        ScenariosCommand::Search {
            owner,
            model,
            slug,
            featured,
            public,
            list,
        } => {
            let filter = ModelScenarioFilter {
                model_scenario_slug: slug,
                model_slug: model,
                owner,
                featured,
                public,
                page: util::page(&list),
                ..ModelScenarioFilter::default()
            };
            let found = ModelScenario::search(api, &filter).await?;
            let data: Vec<schemas::ModelScenario> =
                found.iter().map(|s| s.data().clone()).collect();
            print_scenario_list(&data, global);
            Ok(())
        }

        ScenariosCommand::Create {
            slug,
            model,
            name,
            description,
            public,
        } => {
            let created = api
                .create_model_scenario(&schemas::ModelScenarioCreate {
                    slug,
                    model_slug: model,
                    name,
                    description,
                    public,
                })
                .await?;
            if !global.quiet {
                eprintln!("Created scenario {}", scenario_id(&created));
            }
            Ok(())
        }

        ScenariosCommand::Delete { fullslug } => {
            let parts = parse_slug(&fullslug, 3)?;
            if !util::confirm(&format!("Delete scenario '{fullslug}'?"), global.yes)? {
                return Ok(());
            }
            api.delete_model_scenario(parts[0], parts[1], parts[2])
                .await
                .map_err(|e| CliError::for_resource(e, "scenario", &fullslug))?;
            if !global.quiet {
                eprintln!("Deleted scenario {fullslug}");
            }
            Ok(())
        }
    }
}
