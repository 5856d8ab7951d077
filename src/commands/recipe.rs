// src/commands/recipe.rs
//! One-shot recipe commands
//!
//! Each command plays one pass through the page: load when the form needs
//! existing data, open the form, apply the given values, save. Remote
//! failures are logged by the session and leave the output unchanged; they
//! do not fail the command, except a failed load for `show` and `edit`,
//! which have nothing to open without it.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

use receitas::prompt::FormPrompt;
use receitas::render::{render_card, render_cards, render_modal};
use receitas::{Outcome, RecipeApi, RecipeBook, RecipeId};

use crate::cli::FieldArgs;

/// List all recipes
pub fn cmd_list<A: RecipeApi, W: Write>(api: A, json: bool, out: &mut W) -> Result<()> {
    info!("Listing recipes");
    let mut book = RecipeBook::new(api);
    book.load();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(book.catalog().recipes())?)?;
    } else {
        write!(out, "{}", render_cards(book.catalog()))?;
    }
    Ok(())
}

/// Show one recipe in the read-only form
pub fn cmd_show<A: RecipeApi, W: Write>(api: A, id: &str, json: bool, out: &mut W) -> Result<()> {
    let id = RecipeId::new(id);
    info!("Showing recipe: {}", id);
    let mut book = RecipeBook::new(api);
    load_catalog(&mut book)?;
    book.open_view(&id)?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(book.recipe(&id)?)?)?;
    } else if let Some(form) = render_modal(book.modal()) {
        write!(out, "{}", form)?;
    }
    Ok(())
}

/// Fill in the blank form and create the recipe
pub fn cmd_create<A: RecipeApi, R: BufRead, W: Write>(
    api: A,
    fields: &FieldArgs,
    interactive: bool,
    input: R,
    out: &mut W,
) -> Result<()> {
    info!("Creating recipe");
    let mut book = RecipeBook::new(api);
    book.open_create()?;
    submit(&mut book, fields, interactive, input, out)
}

/// Fill in the form prefilled from a recipe and save it
pub fn cmd_edit<A: RecipeApi, R: BufRead, W: Write>(
    api: A,
    id: &str,
    fields: &FieldArgs,
    interactive: bool,
    input: R,
    out: &mut W,
) -> Result<()> {
    let id = RecipeId::new(id);
    info!("Editing recipe: {}", id);
    let mut book = RecipeBook::new(api);
    load_catalog(&mut book)?;
    book.open_edit(&id)?;
    submit(&mut book, fields, interactive, input, out)
}

/// Commands addressing an existing recipe cannot go on without the catalog
fn load_catalog<A: RecipeApi>(book: &mut RecipeBook<A>) -> Result<()> {
    match book.load() {
        Outcome::Failed { error, .. } => {
            Err(anyhow::Error::new(error).context("Failed to load the recipe catalog"))
        }
        _ => Ok(()),
    }
}

fn submit<A: RecipeApi, R: BufRead, W: Write>(
    book: &mut RecipeBook<A>,
    fields: &FieldArgs,
    interactive: bool,
    input: R,
    out: &mut W,
) -> Result<()> {
    for (field, value) in fields.assignments() {
        book.set_field(field, value)?;
    }

    if interactive {
        if let Some(form) = render_modal(book.modal()) {
            write!(out, "{}", form)?;
        }
        if !FormPrompt::new(input, &mut *out).fill(book)? {
            book.close();
            writeln!(out, "Discarded")?;
            return Ok(());
        }
    }

    match book.save()? {
        Outcome::Created(recipe) => {
            writeln!(out, "Created recipe:")?;
            write!(out, "{}", render_card(book.catalog().len(), &recipe))?;
        }
        Outcome::Updated { id, .. } => {
            if let Some(recipe) = book.catalog().get(&id) {
                writeln!(out, "Saved recipe:")?;
                write!(out, "{}", render_card(position_of(book, &id), recipe))?;
            }
        }
        _ => {}
    }
    Ok(())
}

fn position_of<A: RecipeApi>(book: &RecipeBook<A>, id: &RecipeId) -> usize {
    book.catalog()
        .iter()
        .position(|r| &r.id == id)
        .map_or(0, |i| i + 1)
}

/// Delete a recipe
pub fn cmd_delete<A: RecipeApi, W: Write>(api: A, id: &str, out: &mut W) -> Result<()> {
    let id = RecipeId::new(id);
    info!("Deleting recipe: {}", id);
    let mut book = RecipeBook::new(api);
    if book.delete(&id).is_success() {
        writeln!(out, "Deleted recipe: {}", id)?;
    }
    Ok(())
}
