//! Shared helpers for command handlers.

use std::io::{self, IsTerminal, Write};

use gridflow_api::Page;

use crate::cli::ListArgs;
use crate::error::CliError;

/// Ask for confirmation before a destructive operation.
///
/// Returns `Ok(true)` if the user confirmed (or passed `--yes`). In a
/// non-interactive context without `--yes` this is an error rather than
/// a silent no.
pub fn confirm(prompt: &str, yes: bool) -> Result<bool, CliError> {
    if yes {
        return Ok(true);
    }

    if !io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: prompt.to_owned(),
        });
    }

    eprint!("{prompt} [y/N] ");
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

pub fn page(list: &ListArgs) -> Page {
    Page {
        limit: list.limit,
        page: list.page,
    }
}
