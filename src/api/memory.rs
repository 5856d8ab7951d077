// src/api/memory.rs

//! In-process recipe service
//!
//! Behaves like the remote service (sequential ids, PATCH merges, 404 for
//! unknown ids) and records every call it receives, so callers can check
//! exactly what was sent. It can be switched offline to make every call
//! fail with a transport error.

use std::sync::{Mutex, MutexGuard};

use super::RecipeApi;
use crate::catalog::Operation;
use crate::error::{Error, Result};
use crate::recipe::{Recipe, RecipeFields, RecipeId};

/// A call received by [`MemoryRecipeApi`]
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List,
    Create(RecipeFields),
    Update(RecipeId, RecipeFields),
    Delete(RecipeId),
}

#[derive(Debug, Default)]
struct State {
    recipes: Vec<Recipe>,
    next_id: u64,
    calls: Vec<ApiCall>,
    failing: Vec<Operation>,
    silent_updates: bool,
}

/// Recipe service kept in memory
#[derive(Debug, Default)]
pub struct MemoryRecipeApi {
    state: Mutex<State>,
}

impl MemoryRecipeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with these recipes stored; new ids continue after them
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        let next_id = recipes
            .iter()
            .filter_map(|r| r.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            state: Mutex::new(State {
                recipes,
                next_id,
                ..State::default()
            }),
        }
    }

    /// Make every call of this kind fail with a transport error
    pub fn fail(&self, operation: Operation) {
        let mut state = self.lock();
        if !state.failing.contains(&operation) {
            state.failing.push(operation);
        }
    }

    /// Make every call fail
    pub fn go_offline(&self) {
        for operation in [
            Operation::List,
            Operation::Create,
            Operation::Update,
            Operation::Delete,
        ] {
            self.fail(operation);
        }
    }

    pub fn go_online(&self) {
        self.lock().failing.clear();
    }

    /// Answer PATCH with an empty body instead of the stored recipe
    pub fn silent_updates(&self, silent: bool) {
        self.lock().silent_updates = silent;
    }

    /// What is currently stored
    pub fn stored(&self) -> Vec<Recipe> {
        self.lock().recipes.clone()
    }

    /// Every call received so far, oldest first
    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn begin(&self, call: ApiCall, operation: Operation, path: &str) -> Result<MutexGuard<'_, State>> {
        let mut state = self.lock();
        state.calls.push(call);
        if state.failing.contains(&operation) {
            return Err(Error::Transport {
                url: format!("memory:///{path}"),
                reason: "service unavailable".to_string(),
            });
        }
        Ok(state)
    }
}

fn not_found(id: &RecipeId) -> Error {
    Error::Status {
        status: 404,
        url: format!("memory:///receitas/{id}"),
    }
}

impl RecipeApi for MemoryRecipeApi {
    fn list(&self) -> Result<Vec<Recipe>> {
        let state = self.begin(ApiCall::List, Operation::List, "receitas")?;
        Ok(state.recipes.clone())
    }

    fn create(&self, fields: &RecipeFields) -> Result<Recipe> {
        let mut state = self.begin(
            ApiCall::Create(fields.clone()),
            Operation::Create,
            "receitas",
        )?;
        state.next_id += 1;
        let recipe = Recipe::new(RecipeId::new(state.next_id.to_string()), fields.clone());
        state.recipes.push(recipe.clone());
        Ok(recipe)
    }

    fn update(&self, id: &RecipeId, fields: &RecipeFields) -> Result<Option<Recipe>> {
        let path = format!("receitas/{id}");
        let mut state = self.begin(
            ApiCall::Update(id.clone(), fields.clone()),
            Operation::Update,
            &path,
        )?;
        let silent = state.silent_updates;
        let stored = state
            .recipes
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| not_found(id))?;
        stored.merge(fields);
        Ok(if silent { None } else { Some(stored.clone()) })
    }

    fn delete(&self, id: &RecipeId) -> Result<()> {
        let path = format!("receitas/{id}");
        let mut state = self.begin(ApiCall::Delete(id.clone()), Operation::Delete, &path)?;
        let before = state.recipes.len();
        state.recipes.retain(|r| &r.id != id);
        if state.recipes.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(nome: &str) -> RecipeFields {
        RecipeFields {
            nome: nome.to_string(),
            ..RecipeFields::blank()
        }
    }

    #[test]
    fn test_ids_continue_after_seed() {
        let api = MemoryRecipeApi::with_recipes(vec![Recipe::new(RecipeId::new("7"), fields("A"))]);
        let created = api.create(&fields("B")).unwrap();
        assert_eq!(created.id.as_str(), "8");
        assert_eq!(api.stored().len(), 2);
    }

    #[test]
    fn test_unknown_id_is_404() {
        let api = MemoryRecipeApi::new();
        let err = api.delete(&RecipeId::new("1")).unwrap_err();
        assert!(matches!(err, Error::Status { status: 404, .. }));
        let err = api.update(&RecipeId::new("1"), &fields("x")).unwrap_err();
        assert!(matches!(err, Error::Status { status: 404, .. }));
    }

    #[test]
    fn test_offline_records_calls_and_fails() {
        let api = MemoryRecipeApi::new();
        api.go_offline();

        let err = api.create(&fields("Bolo")).unwrap_err();
        assert!(err.is_remote());
        assert!(api.stored().is_empty());
        assert_eq!(api.calls(), vec![ApiCall::Create(fields("Bolo"))]);

        api.go_online();
        assert!(api.list().unwrap().is_empty());
    }

    #[test]
    fn test_silent_updates() {
        let api = MemoryRecipeApi::new();
        let created = api.create(&fields("A")).unwrap();

        assert!(api.update(&created.id, &fields("B")).unwrap().is_some());
        api.silent_updates(true);
        assert!(api.update(&created.id, &fields("C")).unwrap().is_none());
        assert_eq!(api.stored()[0].nome(), "C");
    }
}
