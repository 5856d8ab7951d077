// src/api/mod.rs

//! Access to the remote recipe service
//!
//! The service exposes four endpoints under one base URL:
//! - `GET /receitas` - full collection
//! - `POST /receitas` - create, answers with the stored recipe
//! - `PATCH /receitas/{id}` - partial update
//! - `DELETE /receitas/{id}` - remove
//!
//! [`RecipeApi`] is the seam between the catalog and the transport.
//! [`HttpRecipeApi`] talks to the real service; [`MemoryRecipeApi`] keeps
//! everything in-process and records calls.

mod client;
mod memory;

pub use client::HttpRecipeApi;
pub use memory::{ApiCall, MemoryRecipeApi};

use crate::error::Result;
use crate::recipe::{Recipe, RecipeFields, RecipeId};

/// The four operations the client consumes
pub trait RecipeApi {
    /// Fetch the whole collection
    fn list(&self) -> Result<Vec<Recipe>>;

    /// Store a new recipe and return the service's copy (with its id)
    fn create(&self, fields: &RecipeFields) -> Result<Recipe>;

    /// Apply fields to a stored recipe
    ///
    /// Returns the service's copy when the response body is a recipe,
    /// `None` when it is anything else.
    fn update(&self, id: &RecipeId, fields: &RecipeFields) -> Result<Option<Recipe>>;

    fn delete(&self, id: &RecipeId) -> Result<()>;
}

impl<T: RecipeApi + ?Sized> RecipeApi for &T {
    fn list(&self) -> Result<Vec<Recipe>> {
        (**self).list()
    }

    fn create(&self, fields: &RecipeFields) -> Result<Recipe> {
        (**self).create(fields)
    }

    fn update(&self, id: &RecipeId, fields: &RecipeFields) -> Result<Option<Recipe>> {
        (**self).update(id, fields)
    }

    fn delete(&self, id: &RecipeId) -> Result<()> {
        (**self).delete(id)
    }
}
