// src/cli/mod.rs
//! CLI definitions for the recipe client
//!
//! This module contains the command-line interface definitions using clap.
//! The command implementations are in the `commands` module.
//!
//! - `list` - Show every recipe card
//! - `show` - Open one recipe read-only
//! - `create` / `edit` - Fill in the form and save it
//! - `delete` - Remove a recipe
//! - `shell` - Interactive session over the whole catalog

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use receitas::Field;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "receitas")]
#[command(author, version)]
#[command(about = "Browse and manage recipes on a remote recipe service", long_about = None)]
pub struct Cli {
    /// Base URL of the recipe service (overrides RECEITAS_API_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Path to a config file (default: <config dir>/receitas/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all recipes
    List {
        /// Print the collection as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one recipe read-only
    Show {
        /// Recipe id
        id: String,

        /// Print the recipe as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a recipe
    Create {
        #[command(flatten)]
        fields: FieldArgs,

        /// Prompt for every field before saving
        #[arg(short, long)]
        interactive: bool,
    },

    /// Edit a recipe
    Edit {
        /// Recipe id
        id: String,

        #[command(flatten)]
        fields: FieldArgs,

        /// Prompt for every field before saving
        #[arg(short, long)]
        interactive: bool,
    },

    /// Delete a recipe
    Delete {
        /// Recipe id
        id: String,
    },

    /// Interactive session: cards, forms and actions in one place
    Shell,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Form values given on the command line
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Recipe name
    #[arg(long)]
    pub nome: Option<String>,

    /// Kind: BEBIDA, SALGADA or DOCE ("" for none)
    #[arg(long)]
    pub tipo: Option<String>,

    /// Ingredients (surrounding whitespace is trimmed on save)
    #[arg(long)]
    pub ingredientes: Option<String>,

    /// Preparation steps
    #[arg(long)]
    pub modo_fazer: Option<String>,

    /// Image URL
    #[arg(long)]
    pub img: Option<String>,

    /// Approximate cost (non-numeric input is sent as null)
    #[arg(long, allow_hyphen_values = true)]
    pub custo: Option<String>,
}

impl FieldArgs {
    /// Given values paired with their form field, in form order
    pub fn assignments(&self) -> Vec<(Field, &str)> {
        [
            (Field::Nome, &self.nome),
            (Field::Tipo, &self.tipo),
            (Field::Ingredientes, &self.ingredientes),
            (Field::ModoFazer, &self.modo_fazer),
            (Field::Img, &self.img),
            (Field::CustoAproximado, &self.custo),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_edit_with_fields() {
        let cli = Cli::parse_from([
            "receitas",
            "--api-url",
            "http://localhost:3000",
            "edit",
            "7",
            "--modo-fazer",
            "assar por 40 min",
            "--custo",
            "-1.5",
        ]);

        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:3000"));
        match cli.command {
            Commands::Edit {
                id,
                fields,
                interactive,
            } => {
                assert_eq!(id, "7");
                assert!(!interactive);
                assert_eq!(
                    fields.assignments(),
                    vec![
                        (Field::ModoFazer, "assar por 40 min"),
                        (Field::CustoAproximado, "-1.5"),
                    ]
                );
            }
            _ => panic!("expected edit"),
        }
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::parse_from(["receitas", "-vv", "list"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::List { json: false }));
    }
}
