//! Model command handlers.

use std::sync::Arc;

use tabled::Tabled;

use gridflow_api::{ApiClient, ModelFilter, schemas};
use gridflow_core::{Model, parse_slug};

use crate::cli::{GlobalOpts, ModelsArgs, ModelsCommand};
use crate::error::CliError;
use crate::output::{opt, opt_display, print_output, render_list, render_single};

use super::scenarios::print_scenario_list;
use super::util;

#[derive(Tabled)]
struct ModelRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "PUBLIC")]
    public: String,
}

fn model_id(model: &schemas::Model) -> String {
    format!("{}:{}", model.owner, model.slug)
}

fn to_row(model: &schemas::Model) -> ModelRow {
    ModelRow {
        id: model_id(model),
        name: opt(model.name.as_deref()).to_owned(),
        public: opt_display(model.public),
    }
}

fn detail(model: &schemas::Model) -> String {
    format!(
        "ID:          {}\nName:        {}\nDescription: {}\nPublic:      {}",
        model_id(model),
        opt(model.name.as_deref()),
        opt(model.description.as_deref()),
        opt_display(model.public),
    )
}

pub async fn handle(
    api: &Arc<ApiClient>,
    args: ModelsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ModelsCommand::Get {
            fullslug,
            scenarios,
        } => {
            let parts = parse_slug(&fullslug, 2)?;
            let model = Model::from_slug(api, parts[0], parts[1])
                .await
                .map_err(|e| CliError::for_resource(e, "model", &fullslug))?;

            if scenarios {
                let found = model.model_scenarios().await?;
                let data: Vec<schemas::ModelScenario> =
                    found.iter().map(|s| s.data().clone()).collect();
                print_scenario_list(&data, global);
            } else {
                let rendered = render_single(&global.output, model.data(), detail, model_id);
                print_output(&rendered, global.quiet);
            }
            Ok(())
        }

        ModelsCommand::Search {
            owner,
            slug,
            featured,
            public,
            list,
        } => {
            let filter = ModelFilter {
                slug,
                owner,
                featured,
                public,
                page: util::page(&list),
                ..ModelFilter::default()
            };
            let found = Model::search(api, &filter).await?;
            let data: Vec<schemas::Model> = found.iter().map(|m| m.data().clone()).collect();
            let rendered = render_list(&global.output, &data, to_row, model_id);
            print_output(&rendered, global.quiet);
            Ok(())
        }

        ModelsCommand::Create {
            slug,
            name,
            description,
            public,
        } => {
            let created = api
                .create_model(&schemas::ModelCreate {
                    slug,
                    name,
                    description,
                    public,
                })
                .await?;
            if !global.quiet {
                eprintln!("Created model {}", model_id(&created));
            }
            Ok(())
        }

        ModelsCommand::Delete { fullslug } => {
            let parts = parse_slug(&fullslug, 2)?;
            if !util::confirm(&format!("Delete model '{fullslug}'?"), global.yes)? {
                return Ok(());
            }
            api.delete_model(parts[0], parts[1])
                .await
                .map_err(|e| CliError::for_resource(e, "model", &fullslug))?;
            if !global.quiet {
                eprintln!("Deleted model {fullslug}");
            }
            Ok(())
        }
    }
}
