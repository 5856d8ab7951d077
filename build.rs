// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: recipe id
fn id_arg() -> Arg {
    Arg::new("id").required(true).help("Recipe id")
}

/// Common argument: interactive prompts
fn interactive_arg() -> Arg {
    Arg::new("interactive")
        .short('i')
        .long("interactive")
        .action(ArgAction::SetTrue)
        .help("Prompt for every field before saving")
}

/// Form field flags shared by create and edit
fn field_args() -> Vec<Arg> {
    vec![
        Arg::new("nome").long("nome").help("Recipe name"),
        Arg::new("tipo").long("tipo").help("Kind: BEBIDA, SALGADA or DOCE"),
        Arg::new("ingredientes").long("ingredientes").help("Ingredients"),
        Arg::new("modo_fazer").long("modo-fazer").help("Preparation steps"),
        Arg::new("img").long("img").help("Image URL"),
        Arg::new("custo").long("custo").help("Approximate cost"),
    ]
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of text")
}

fn build_cli() -> Command {
    Command::new("receitas")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Receitas Contributors")
        .about("Browse and manage recipes on a remote recipe service")
        .arg(
            Arg::new("api_url")
                .long("api-url")
                .value_name("URL")
                .global(true)
                .help("Base URL of the recipe service (env: RECEITAS_API_URL)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .global(true)
                .help("Path to a config file"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Log more (-v info, -vv debug)"),
        )
        .subcommand(
            Command::new("list")
                .about("List all recipes")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Show one recipe read-only")
                .arg(id_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("create")
                .about("Create a recipe")
                .args(field_args())
                .arg(interactive_arg()),
        )
        .subcommand(
            Command::new("edit")
                .about("Edit a recipe")
                .arg(id_arg())
                .args(field_args())
                .arg(interactive_arg()),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a recipe")
                .arg(id_arg()),
        )
        .subcommand(Command::new("shell").about("Interactive session over the whole catalog"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "zsh", "fish", "powershell", "elvish"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("receitas.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
