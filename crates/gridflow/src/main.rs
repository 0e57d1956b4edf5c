mod cli;
mod commands;
mod error;
mod output;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gridflow_api::ApiClient;
use gridflow_config::Settings;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let settings = load_settings(&cli.global)?;

    match cli.command {
        // Auth commands talk to the identity provider, not the platform API
        Command::Auth(args) => commands::auth::handle(args, &settings, &cli.global).await,

        cmd => {
            let api = Arc::new(build_client(&settings)?);
            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &api, &cli.global).await
        }
    }
}

/// Resolve settings from config file + environment, then apply CLI flag
/// overrides on top.
fn load_settings(global: &cli::GlobalOpts) -> Result<Settings, CliError> {
    let mut settings = Settings::load()?;

    if let Some(url) = &global.api_url {
        settings.api_url.clone_from(url);
    }
    if let Some(path) = &global.token_path {
        settings.token_path = Some(path.clone());
    }

    Ok(settings)
}

fn build_client(settings: &Settings) -> Result<ApiClient, CliError> {
    let api_config = settings.api_config()?;
    let auth_config = settings.auth_config()?;
    ApiClient::new(&api_config, auth_config).map_err(CliError::from)
}
