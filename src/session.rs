// src/session.rs

//! The recipe list: catalog snapshot plus the form slot
//!
//! `RecipeBook` is what a screen full of recipe cards needs. It loads the
//! collection once, opens the form for a card, and turns a confirmed form
//! into a remote command whose outcome becomes the next snapshot.
//!
//! Remote failures are reported through `tracing` and otherwise swallowed:
//! the operation returns the failed [`Outcome`], the snapshot stays as it
//! was, and nothing is retried. Local misuse (unknown id, saving a
//! read-only form) is returned as an error.

use tracing::{error, info};

use crate::api::RecipeApi;
use crate::catalog::{Catalog, Command, Outcome};
use crate::error::{Error, Result};
use crate::modal::{Field, RecipeModal};
use crate::recipe::{Recipe, RecipeId};

/// Recipe collection and form state for one session
pub struct RecipeBook<A: RecipeApi> {
    api: A,
    catalog: Catalog,
    modal: RecipeModal,
}

impl<A: RecipeApi> RecipeBook<A> {
    /// Start with an empty catalog; call [`RecipeBook::load`] to populate it
    pub fn new(api: A) -> Self {
        Self {
            api,
            catalog: Catalog::default(),
            modal: RecipeModal::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Current snapshot
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn modal(&self) -> &RecipeModal {
        &self.modal
    }

    /// Fetch the full collection and replace the snapshot with it
    pub fn load(&mut self) -> Outcome {
        self.run(Command::List)
    }

    /// Look up a recipe in the current snapshot
    pub fn recipe(&self, id: &RecipeId) -> Result<&Recipe> {
        self.catalog
            .get(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Open the form read-only on a recipe
    pub fn open_view(&mut self, id: &RecipeId) -> Result<()> {
        let recipe = self.recipe(id)?.clone();
        self.modal.open_view(&recipe)
    }

    /// Open the form editable on a recipe
    pub fn open_edit(&mut self, id: &RecipeId) -> Result<()> {
        let recipe = self.recipe(id)?.clone();
        self.modal.open_edit(&recipe)
    }

    /// Open the form on the blank template
    pub fn open_create(&mut self) -> Result<()> {
        self.modal.open_create()
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        self.modal.set_field(field, value)
    }

    /// Discard the open form
    pub fn close(&mut self) {
        self.modal.close();
    }

    /// Confirm the open form and send it to the service
    ///
    /// The form closes whether or not the remote call succeeds.
    pub fn save(&mut self) -> Result<Outcome> {
        let request = self.modal.save()?;
        Ok(self.run(Command::from(request)))
    }

    /// Delete a recipe remotely; the card goes away once the service confirms
    pub fn delete(&mut self, id: &RecipeId) -> Outcome {
        self.run(Command::Delete(id.clone()))
    }

    fn run(&mut self, command: Command) -> Outcome {
        let outcome = command.execute(&self.api);
        report(&outcome);
        self.catalog = self.catalog.apply(&outcome);
        outcome
    }
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Loaded(recipes) => info!("Loaded {} recipes", recipes.len()),
        Outcome::Created(recipe) => info!("Recipe created: {} ({})", recipe.nome(), recipe.id),
        Outcome::Updated { id, .. } => info!("Recipe updated: {}", id),
        Outcome::Deleted(id) => info!("Recipe deleted: {}", id),
        Outcome::Failed {
            operation,
            error: err,
        } => error!("Failed to {} recipe: {}", operation.as_str(), err),
    }
}
