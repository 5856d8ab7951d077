// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use receitas::{MemoryRecipeApi, Recipe, RecipeBook, RecipeFields, RecipeId, RecipeKind};

/// Build a recipe with the given id, name and kind; other fields filled in
pub fn recipe(id: &str, nome: &str, tipo: RecipeKind) -> Recipe {
    Recipe::new(
        RecipeId::new(id),
        RecipeFields {
            nome: nome.to_string(),
            tipo: Some(tipo),
            ingredientes: format!("ingredientes de {nome}"),
            modo_fazer: "misturar e servir".to_string(),
            img: format!("https://img.example/{id}.jpg"),
            custo_aproximado: 10.0,
        },
    )
}

/// A service holding three recipes: Suco (1), Coxinha (2), Pudim (3)
pub fn seeded_api() -> MemoryRecipeApi {
    MemoryRecipeApi::with_recipes(vec![
        recipe("1", "Suco de laranja", RecipeKind::Bebida),
        recipe("2", "Coxinha", RecipeKind::Salgada),
        recipe("3", "Pudim", RecipeKind::Doce),
    ])
}

/// A book over the seeded service, already loaded
pub fn loaded_book(api: &MemoryRecipeApi) -> RecipeBook<&MemoryRecipeApi> {
    let mut book = RecipeBook::new(api);
    assert!(book.load().is_success());
    book
}

/// Card titles in order
pub fn titles<A: receitas::RecipeApi>(book: &RecipeBook<A>) -> Vec<String> {
    book.catalog().iter().map(|r| r.nome().to_string()).collect()
}
