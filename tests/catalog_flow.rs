// tests/catalog_flow.rs

//! End-to-end catalog behaviour: load, view, edit, create, delete.

mod common;

use common::{loaded_book, seeded_api, titles};
use receitas::render::render_cards;
use receitas::{
    ApiCall, Error, Field, FormAction, Operation, Outcome, RecipeBook, RecipeId, RecipeKind,
};

#[test]
fn test_card_per_recipe_after_load() {
    let api = seeded_api();
    let book = loaded_book(&api);

    assert_eq!(book.catalog().len(), api.stored().len());
    assert_eq!(titles(&book), vec!["Suco de laranja", "Coxinha", "Pudim"]);

    let cards = render_cards(book.catalog());
    let card_titles: Vec<&str> = cards.lines().filter(|l| l.starts_with('[')).collect();
    assert_eq!(
        card_titles,
        vec!["[1] Suco de laranja", "[2] Coxinha", "[3] Pudim"]
    );
}

#[test]
fn test_opening_a_recipe_never_shows_stale_draft() {
    let api = seeded_api();
    let mut book = loaded_book(&api);

    book.open_edit(&RecipeId::new("2")).unwrap();
    book.set_field(Field::Nome, "Coxinha de jaca").unwrap();
    book.close();

    book.open_edit(&RecipeId::new("3")).unwrap();
    let draft = book.modal().form().unwrap().draft().clone();
    assert_eq!(draft.get(Field::Nome), "Pudim");
    assert_eq!(draft.get(Field::Tipo), "DOCE");
    assert_eq!(draft.get(Field::Ingredientes), "ingredientes de Pudim");
    assert_eq!(draft.get(Field::ModoFazer), "misturar e servir");
    assert_eq!(draft.get(Field::Img), "https://img.example/3.jpg");
    assert_eq!(draft.get(Field::CustoAproximado), "10");

    // Re-targeting an open edit form resets it as well
    book.set_field(Field::Nome, "rascunho").unwrap();
    book.open_edit(&RecipeId::new("2")).unwrap();
    assert_eq!(book.modal().form().unwrap().draft().get(Field::Nome), "Coxinha");
}

#[test]
fn test_edit_trims_ingredients_and_casts_cost() {
    let api = seeded_api();
    let mut book = loaded_book(&api);

    book.open_edit(&RecipeId::new("1")).unwrap();
    book.set_field(Field::Ingredientes, "  eggs, milk  ").unwrap();
    book.set_field(Field::CustoAproximado, "12.5").unwrap();
    assert!(book.save().unwrap().is_success());

    let local = book.recipe(&RecipeId::new("1")).unwrap();
    assert_eq!(local.fields.ingredientes, "eggs, milk");
    assert_eq!(local.fields.custo_aproximado, 12.5);

    match api.calls().last() {
        Some(ApiCall::Update(id, sent)) => {
            assert_eq!(id.as_str(), "1");
            assert_eq!(sent.ingredientes, "eggs, milk");
            assert_eq!(sent.custo_aproximado, 12.5);
        }
        other => panic!("expected update call, got {:?}", other),
    }
}

#[test]
fn test_non_numeric_cost_saves_and_closes() {
    let api = seeded_api();
    let mut book = loaded_book(&api);

    book.open_edit(&RecipeId::new("2")).unwrap();
    book.set_field(Field::CustoAproximado, "abc").unwrap();
    let outcome = book.save().unwrap();

    assert!(outcome.is_success());
    assert!(!book.modal().is_open());
    assert!(
        book.recipe(&RecipeId::new("2"))
            .unwrap()
            .fields
            .custo_aproximado
            .is_nan()
    );
    assert!(matches!(api.calls().last(), Some(ApiCall::Update(..))));
}

#[test]
fn test_update_without_server_copy_merges_submitted_fields() {
    let api = seeded_api();
    api.silent_updates(true);
    let mut book = loaded_book(&api);

    book.open_edit(&RecipeId::new("3")).unwrap();
    book.set_field(Field::Nome, "Pudim de leite").unwrap();
    book.save().unwrap();

    let local = book.recipe(&RecipeId::new("3")).unwrap();
    assert_eq!(local.nome(), "Pudim de leite");
    assert_eq!(local.fields.tipo, Some(RecipeKind::Doce));
}

#[test]
fn test_create_appends_one_card() {
    let api = seeded_api();
    let mut book = loaded_book(&api);

    book.open_create().unwrap();
    book.set_field(Field::Nome, "Bolo").unwrap();
    book.set_field(Field::Tipo, "DOCE").unwrap();
    book.set_field(Field::Ingredientes, "farinha").unwrap();
    book.set_field(Field::ModoFazer, "misturar").unwrap();
    book.set_field(Field::Img, "").unwrap();
    book.set_field(Field::CustoAproximado, "0").unwrap();

    let outcome = book.save().unwrap();
    let created_id = match outcome {
        Outcome::Created(recipe) => recipe.id,
        other => panic!("expected created, got {:?}", other),
    };

    assert_eq!(book.catalog().len(), 4);
    assert_eq!(titles(&book).last().map(String::as_str), Some("Bolo"));
    assert_eq!(book.catalog().recipes()[3].id, created_id);
}

#[test]
fn test_failed_create_adds_nothing() {
    let api = seeded_api();
    let mut book = loaded_book(&api);
    api.fail(Operation::Create);

    book.open_create().unwrap();
    book.set_field(Field::Nome, "Bolo").unwrap();
    let outcome = book.save().unwrap();

    assert!(matches!(
        outcome,
        Outcome::Failed {
            operation: Operation::Create,
            error: Error::Transport { .. }
        }
    ));
    assert_eq!(book.catalog().len(), 3);
    assert!(!book.modal().is_open());
}

#[test]
fn test_close_without_saving_changes_nothing() {
    let api = seeded_api();
    let mut book = loaded_book(&api);
    let before = titles(&book);

    book.open_create().unwrap();
    book.set_field(Field::Nome, "Rascunho").unwrap();
    book.close();

    book.open_edit(&RecipeId::new("1")).unwrap();
    book.set_field(Field::Nome, "Outro rascunho").unwrap();
    book.close();

    assert_eq!(titles(&book), before);
    assert_eq!(api.calls(), vec![ApiCall::List]);
}

#[test]
fn test_read_only_form() {
    let api = seeded_api();
    let mut book = loaded_book(&api);

    book.open_view(&RecipeId::new("2")).unwrap();
    let form = book.modal().form().unwrap();
    assert!(form.fields_disabled());
    assert!(!form.actions().contains(&FormAction::Save));
    assert!(!form.actions().contains(&FormAction::Create));

    for field in Field::ALL {
        assert!(matches!(
            book.set_field(field, "x"),
            Err(Error::FieldDisabled(_))
        ));
    }
    assert!(matches!(book.save(), Err(Error::SaveUnavailable)));
}

#[test]
fn test_delete_removes_card_after_confirmation() {
    let api = seeded_api();
    let mut book = loaded_book(&api);

    assert!(book.delete(&RecipeId::new("2")).is_success());
    assert_eq!(titles(&book), vec!["Suco de laranja", "Pudim"]);
    assert_eq!(api.stored().len(), 2);
}

#[test]
fn test_delete_of_unknown_id_keeps_catalog() {
    let api = seeded_api();
    let mut book = loaded_book(&api);

    let outcome = book.delete(&RecipeId::new("42"));
    assert!(matches!(
        outcome,
        Outcome::Failed {
            error: Error::Status { status: 404, .. },
            ..
        }
    ));
    assert_eq!(book.catalog().len(), 3);
}

#[test]
fn test_reload_replaces_local_state() {
    let api = seeded_api();
    let mut book = loaded_book(&api);

    // Another session deletes a recipe behind our back
    let mut second = RecipeBook::new(&api);
    second.load();
    assert!(second.delete(&RecipeId::new("1")).is_success());

    // The first book still shows the old snapshot until it reloads
    assert_eq!(book.catalog().len(), 3);
    book.load();
    assert_eq!(titles(&book), vec!["Coxinha", "Pudim"]);
}
