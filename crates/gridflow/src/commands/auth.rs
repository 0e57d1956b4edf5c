//! Auth command handlers: device-flow login, logout, status.

use owo_colors::OwoColorize;

use gridflow_api::{DeviceFlow, Error as ApiError, TokenStore};
use gridflow_config::Settings;

use crate::cli::{AuthArgs, AuthCommand, GlobalOpts};
use crate::error::CliError;
use crate::output::should_color;

pub async fn handle(
    args: AuthArgs,
    settings: &Settings,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AuthCommand::Login => login(settings, global).await,
        AuthCommand::Logout => logout(settings, global),
        AuthCommand::Status => status(settings),
    }
}

async fn login(settings: &Settings, global: &GlobalOpts) -> Result<(), CliError> {
    let flow = DeviceFlow::new(settings.auth_config()?)?;
    let grant = flow.start().await?;

    if should_color(&global.color) {
        eprintln!(
            "Open {} in a browser and confirm the code {}",
            grant.verification_uri_complete.bold().underline(),
            grant.user_code.bold().cyan(),
        );
    } else {
        eprintln!(
            "Open {} in a browser and confirm the code {}",
            grant.verification_uri_complete, grant.user_code,
        );
    }
    eprintln!("Waiting for confirmation...");

    flow.poll(&grant).await?;

    if !global.quiet {
        eprintln!("Logged in. Token stored at {}", flow.store().path().display());
    }
    Ok(())
}

fn logout(settings: &Settings, global: &GlobalOpts) -> Result<(), CliError> {
    let store = TokenStore::new(settings.token_path());
    store.clear().map_err(ApiError::from)?;

    if !global.quiet {
        eprintln!("Logged out.");
    }
    Ok(())
}

fn status(settings: &Settings) -> Result<(), CliError> {
    let store = TokenStore::new(settings.token_path());

    match store.load() {
        Ok(token) => {
            println!("Logged in (token at {})", store.path().display());
            if let Some(scope) = token.scope {
                println!("Scopes: {scope}");
            }
        }
        Err(_) => println!("Not logged in. Run: gridflow auth login"),
    }
    Ok(())
}
