// src/catalog.rs

//! Catalog snapshots and the command/outcome cycle
//!
//! Every remote operation is a [`Command`]. Executing it against a
//! [`RecipeApi`] yields an [`Outcome`], and applying an outcome to a
//! [`Catalog`] produces the next snapshot. Snapshots are immutable; a failed
//! outcome produces a snapshot equal to the previous one, so local state
//! never runs ahead of the service.

use std::sync::Arc;

use crate::api::RecipeApi;
use crate::error::Error;
use crate::modal::SaveRequest;
use crate::recipe::{Recipe, RecipeFields, RecipeId};

/// Remote operations understood by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

/// A remote operation waiting to be executed
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Create(RecipeFields),
    Update(RecipeId, RecipeFields),
    Delete(RecipeId),
}

impl Command {
    pub fn operation(&self) -> Operation {
        match self {
            Command::List => Operation::List,
            Command::Create(_) => Operation::Create,
            Command::Update(..) => Operation::Update,
            Command::Delete(_) => Operation::Delete,
        }
    }

    /// Run the command; failures become [`Outcome::Failed`], never panics or errors
    pub fn execute<A: RecipeApi + ?Sized>(self, api: &A) -> Outcome {
        let operation = self.operation();
        let result = match self {
            Command::List => api.list().map(Outcome::Loaded),
            Command::Create(fields) => api.create(&fields).map(Outcome::Created),
            Command::Update(id, fields) => {
                api.update(&id, &fields).map(|stored| Outcome::Updated {
                    id,
                    submitted: fields,
                    stored,
                })
            }
            Command::Delete(id) => api.delete(&id).map(|()| Outcome::Deleted(id)),
        };
        result.unwrap_or_else(|error| Outcome::Failed { operation, error })
    }
}

impl From<SaveRequest> for Command {
    fn from(request: SaveRequest) -> Self {
        match request {
            SaveRequest::Create(fields) => Command::Create(fields),
            SaveRequest::Update(id, fields) => Command::Update(id, fields),
        }
    }
}

/// The result of one executed command
#[derive(Debug)]
pub enum Outcome {
    /// Full collection, replaces the snapshot
    Loaded(Vec<Recipe>),
    /// Server representation of the new recipe, appended
    Created(Recipe),
    /// Update accepted; `stored` is the server's copy when it sent one back
    Updated {
        id: RecipeId,
        submitted: RecipeFields,
        stored: Option<Recipe>,
    },
    Deleted(RecipeId),
    Failed { operation: Operation, error: Error },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Failed { .. })
    }
}

/// An immutable, insertion-ordered view of the recipe collection
///
/// Duplicate ids are tolerated; updates and deletes touch every entry
/// carrying the id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Arc<[Recipe]>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: recipes.into(),
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    /// First recipe with this id
    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| &r.id == id)
    }

    /// Recipe at a 1-based card position
    pub fn at_position(&self, position: usize) -> Option<&Recipe> {
        position.checked_sub(1).and_then(|i| self.recipes.get(i))
    }

    /// Produce the snapshot that follows `outcome`
    pub fn apply(&self, outcome: &Outcome) -> Catalog {
        match outcome {
            Outcome::Loaded(recipes) => Catalog::new(recipes.clone()),
            Outcome::Created(recipe) => {
                let mut recipes = self.recipes.to_vec();
                recipes.push(recipe.clone());
                Catalog::new(recipes)
            }
            Outcome::Updated {
                id,
                submitted,
                stored,
            } => {
                let authoritative = stored.as_ref().filter(|s| &s.id == id);
                let recipes = self
                    .recipes
                    .iter()
                    .map(|recipe| {
                        if &recipe.id != id {
                            return recipe.clone();
                        }
                        match authoritative {
                            Some(server_copy) => server_copy.clone(),
                            None => {
                                let mut merged = recipe.clone();
                                merged.merge(submitted);
                                merged
                            }
                        }
                    })
                    .collect();
                Catalog::new(recipes)
            }
            Outcome::Deleted(id) => Catalog::new(
                self.recipes
                    .iter()
                    .filter(|recipe| &recipe.id != id)
                    .cloned()
                    .collect(),
            ),
            Outcome::Failed { .. } => self.clone(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
