//! Command dispatch: bridges CLI args -> library calls -> output formatting.

pub mod assets;
pub mod auth;
pub mod models;
pub mod nodes;
pub mod publishers;
pub mod records;
pub mod runs;
pub mod scenarios;
pub mod sources;
pub mod technologies;
pub mod util;

use std::sync::Arc;

use gridflow_api::ApiClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a platform-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    api: &Arc<ApiClient>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Nodes(args) => nodes::handle(api, args, global).await,
        Command::Assets(args) => assets::handle(api, args, global).await,
        Command::Models(args) => models::handle(api, args, global).await,
        Command::Scenarios(args) => scenarios::handle(api, args, global).await,
        Command::Runs(args) => runs::handle(api, args, global).await,
        Command::Technologies(args) => technologies::handle(api, args, global).await,
        Command::Publishers(args) => publishers::handle(api, args, global).await,
        Command::Sources(args) => sources::handle(api, args, global).await,
        Command::Records(args) => records::handle(api, args, global).await,
        // Auth is handled before dispatch
        Command::Auth(_) => unreachable!(),
    }
}
