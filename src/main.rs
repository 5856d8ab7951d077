// src/main.rs

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io;
use tracing_subscriber::EnvFilter;

use receitas::{ClientConfig, HttpRecipeApi};

mod cli;
mod commands;

use cli::{Cli, Commands};

/// Default log filter for a verbosity count
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the cards and forms
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(cli.verbose))),
        )
        .with_writer(io::stderr)
        .init();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "receitas", &mut io::stdout());
        return Ok(());
    }

    let config = ClientConfig::from_env(cli.api_url.as_deref(), cli.config.as_deref())?;
    let api = HttpRecipeApi::new(&config)?;
    tracing::debug!("Using recipe service at {}", api.base_url());

    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::List { json } => commands::cmd_list(api, json, &mut stdout),
        Commands::Show { id, json } => commands::cmd_show(api, &id, json, &mut stdout),
        Commands::Create {
            fields,
            interactive,
        } => commands::cmd_create(api, &fields, interactive, io::stdin().lock(), &mut stdout),
        Commands::Edit {
            id,
            fields,
            interactive,
        } => commands::cmd_edit(api, &id, &fields, interactive, io::stdin().lock(), &mut stdout),
        Commands::Delete { id } => commands::cmd_delete(api, &id, &mut stdout),
        Commands::Shell => {
            drop(stdout);
            commands::cmd_shell(api)
        }
        Commands::Completions { .. } => Ok(()),
    }
}
