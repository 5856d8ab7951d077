// src/commands/mod.rs
//! Command handlers for the receitas CLI

mod recipe;
mod shell;

pub use recipe::{cmd_create, cmd_delete, cmd_edit, cmd_list, cmd_show};
pub use shell::cmd_shell;
