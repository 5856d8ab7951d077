// src/render.rs

//! Plain-text rendering of recipe cards and the recipe form

use crate::catalog::Catalog;
use crate::modal::{Field, Form, RecipeModal};
use crate::recipe::{Recipe, RecipeKind};

/// Placeholder shown for an empty kind selector
pub const NO_KIND_LABEL: &str = "Select a kind";

/// One card: position, title, illustration and actions
pub fn render_card(position: usize, recipe: &Recipe) -> String {
    let mut out = format!("[{}] {}\n", position, recipe.nome());
    out.push_str(&format!(
        "    Illustration: {}\n",
        display_or_dash(&recipe.fields.img)
    ));
    out.push_str(&format!(
        "    Actions: view {p} | edit {p} | delete {p}   (id {id})\n",
        p = position,
        id = recipe.id
    ));
    out
}

/// Every card in catalog order
pub fn render_cards(catalog: &Catalog) -> String {
    if catalog.is_empty() {
        return "No recipes\n".to_string();
    }

    let mut out = String::new();
    for (i, recipe) in catalog.iter().enumerate() {
        out.push_str(&render_card(i + 1, recipe));
    }
    out
}

/// The open form, or `None` when the form is closed
pub fn render_modal(modal: &RecipeModal) -> Option<String> {
    modal.form().map(render_form)
}

pub fn render_form(form: &Form) -> String {
    let draft = form.draft();
    let disabled = form.fields_disabled();
    let mut out = format!("== {} ==\n", form.title());
    for field in Field::ALL {
        let value = draft.get(field);
        let shown = match field {
            Field::Tipo if value.is_empty() => NO_KIND_LABEL.to_string(),
            _ => value.to_string(),
        };
        let marker = if disabled { " (read-only)" } else { "" };
        let label = format!("{}:", field.label());
        out.push_str(&format!("  {:<18}{}{}\n", label, shown, marker));
        if field == Field::Tipo && !disabled {
            out.push_str(&format!("  {:<18}{}\n", "", kind_options()));
        }
    }

    let actions: Vec<String> = form
        .actions()
        .iter()
        .map(|a| format!("[{}]", a.label()))
        .collect();
    out.push_str(&format!("  {}\n", actions.join(" ")));
    out
}

/// Options offered by the kind selector
pub fn kind_options() -> String {
    let kinds: Vec<&str> = RecipeKind::ALL.iter().map(|k| k.as_str()).collect();
    format!("options: \"\" ({}), {}", NO_KIND_LABEL, kinds.join(", "))
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
