// src/commands/shell.rs
//! Interactive session command

use anyhow::Result;
use std::io::{self, IsTerminal};
use tracing::{info, warn};

use receitas::{RecipeApi, RecipeBook, Shell};

/// Run the interactive session on stdin/stdout
pub fn cmd_shell<A: RecipeApi>(api: A) -> Result<()> {
    info!("Starting interactive session");
    if !io::stdin().is_terminal() {
        warn!("stdin is not a terminal; reading commands from it");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(RecipeBook::new(api), stdin.lock(), stdout.lock());
    shell.run()?;
    Ok(())
}
