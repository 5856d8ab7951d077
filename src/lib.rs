// src/lib.rs

//! Receitas - recipe catalog client
//!
//! Lists recipes held by a remote HTTP service and lets a user view,
//! create, edit and delete them through a form.
//!
//! # Architecture
//!
//! - `api`: the four remote operations behind the `RecipeApi` trait
//! - `catalog`: immutable snapshots; command outcomes produce the next one
//! - `modal`: the single form slot (view, edit or create) and its draft
//! - `session`: `RecipeBook`, tying catalog, form and service together
//! - `shell`, `prompt`, `render`: the terminal front end

pub mod api;
pub mod catalog;
pub mod config;
mod error;
pub mod modal;
pub mod prompt;
pub mod recipe;
pub mod render;
pub mod session;
pub mod shell;

pub use api::{ApiCall, HttpRecipeApi, MemoryRecipeApi, RecipeApi};
pub use catalog::{Catalog, Command, Operation, Outcome};
pub use config::{ClientConfig, API_URL_ENV, DEFAULT_API_URL};
pub use error::{Error, Result};
pub use modal::{parse_float, Draft, Field, Form, FormAction, FormMode, RecipeModal, SaveRequest};
pub use recipe::{Recipe, RecipeFields, RecipeId, RecipeKind};
pub use session::RecipeBook;
pub use shell::{Shell, ShellCommand};
