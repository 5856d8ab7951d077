// src/modal.rs

//! The recipe form
//!
//! One form slot that is either closed or open in exactly one mode:
//!
//! - `View`: the recipe's fields, all disabled, only Close offered
//! - `Edit`: prefilled from a recipe, Save and Close offered
//! - `Create`: prefilled from the blank template, Create and Close offered
//!
//! Opening always re-initializes the draft from the target, so switching
//! to a different recipe never carries unsaved edits across. Switching mode
//! requires closing first.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::recipe::{Recipe, RecipeFields, RecipeId, RecipeKind};

/// A form field, keyed by its wire name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Nome,
    Tipo,
    Ingredientes,
    ModoFazer,
    Img,
    CustoAproximado,
}

impl Field {
    /// Every field, in form order
    pub const ALL: [Field; 6] = [
        Field::Nome,
        Field::Tipo,
        Field::Ingredientes,
        Field::ModoFazer,
        Field::Img,
        Field::CustoAproximado,
    ];

    /// Wire name of the field
    pub fn key(&self) -> &'static str {
        match self {
            Field::Nome => "nome",
            Field::Tipo => "tipo",
            Field::Ingredientes => "ingredientes",
            Field::ModoFazer => "modoFazer",
            Field::Img => "img",
            Field::CustoAproximado => "custoAproximado",
        }
    }

    /// Label shown next to the field
    pub fn label(&self) -> &'static str {
        match self {
            Field::Nome => "Name",
            Field::Tipo => "Kind",
            Field::Ingredientes => "Ingredients",
            Field::ModoFazer => "Preparation",
            Field::Img => "Image (URL)",
            Field::CustoAproximado => "Approximate cost",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "nome" => Ok(Field::Nome),
            "tipo" => Ok(Field::Tipo),
            "ingredientes" => Ok(Field::Ingredientes),
            "modoFazer" | "modo-fazer" | "modo_fazer" => Ok(Field::ModoFazer),
            "img" => Ok(Field::Img),
            "custoAproximado" | "custo-aproximado" | "custo_aproximado" | "custo" => {
                Ok(Field::CustoAproximado)
            }
            _ => Err(Error::UnknownField(s.to_string())),
        }
    }
}

/// Uncommitted form values, held as the text the user typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    nome: String,
    tipo: String,
    ingredientes: String,
    modo_fazer: String,
    img: String,
    custo_aproximado: String,
}

impl Draft {
    /// Initialize from stored values; a NaN or zero cost shows as `0`
    pub fn from_fields(fields: &RecipeFields) -> Self {
        Self {
            nome: fields.nome.clone(),
            tipo: fields.tipo.map(|k| k.as_str().to_string()).unwrap_or_default(),
            ingredientes: fields.ingredientes.clone(),
            modo_fazer: fields.modo_fazer.clone(),
            img: fields.img.clone(),
            custo_aproximado: format_cost(fields.custo_aproximado),
        }
    }

    /// Current text of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Nome => &self.nome,
            Field::Tipo => &self.tipo,
            Field::Ingredientes => &self.ingredientes,
            Field::ModoFazer => &self.modo_fazer,
            Field::Img => &self.img,
            Field::CustoAproximado => &self.custo_aproximado,
        }
    }

    /// Keyed update. Only `tipo` is constrained, to the selector's options.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        let slot = match field {
            Field::Nome => &mut self.nome,
            Field::Tipo => {
                if !value.is_empty() {
                    value.parse::<RecipeKind>()?;
                }
                &mut self.tipo
            }
            Field::Ingredientes => &mut self.ingredientes,
            Field::ModoFazer => &mut self.modo_fazer,
            Field::Img => &mut self.img,
            Field::CustoAproximado => &mut self.custo_aproximado,
        };
        *slot = value;
        Ok(())
    }

    /// Build the save payload: trimmed ingredients, cost cast to a number
    pub fn normalize(&self) -> RecipeFields {
        RecipeFields {
            nome: self.nome.clone(),
            tipo: self.tipo.parse().ok(),
            ingredientes: self.ingredientes.trim().to_string(),
            modo_fazer: self.modo_fazer.clone(),
            img: self.img.clone(),
            custo_aproximado: parse_float(&self.custo_aproximado),
        }
    }
}

fn format_cost(cost: f64) -> String {
    if cost.is_nan() || cost == 0.0 {
        "0".to_string()
    } else if cost == f64::INFINITY {
        "Infinity".to_string()
    } else if cost == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        cost.to_string()
    }
}

/// Parse the longest leading decimal literal, like JavaScript's `parseFloat`
///
/// Leading whitespace is skipped and trailing garbage ignored
/// (`"12.5kg"` is 12.5). `Infinity` is accepted with an optional sign.
/// Anything without a leading number yields NaN.
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Which way the form is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    View,
    Edit,
    Create,
}

impl FormMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormMode::View => "view",
            FormMode::Edit => "edit",
            FormMode::Create => "create",
        }
    }
}

/// Buttons offered by an open form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Submit a new recipe
    Create,
    /// Submit changes to an existing recipe
    Save,
    Close,
}

impl FormAction {
    pub fn label(&self) -> &'static str {
        match self {
            FormAction::Create => "Create",
            FormAction::Save => "Save",
            FormAction::Close => "Close",
        }
    }
}

/// What a confirmed form asks the catalog to do
#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest {
    Create(RecipeFields),
    Update(RecipeId, RecipeFields),
}

/// An open form: its mode, its target and the draft
#[derive(Debug, Clone)]
pub enum Form {
    View { recipe: Recipe, draft: Draft },
    Edit { recipe: Recipe, draft: Draft },
    Create { draft: Draft },
}

impl Form {
    pub fn mode(&self) -> FormMode {
        match self {
            Form::View { .. } => FormMode::View,
            Form::Edit { .. } => FormMode::Edit,
            Form::Create { .. } => FormMode::Create,
        }
    }

    pub fn draft(&self) -> &Draft {
        match self {
            Form::View { draft, .. } | Form::Edit { draft, .. } | Form::Create { draft } => draft,
        }
    }

    /// The recipe being viewed or edited; `None` for the blank template
    pub fn recipe(&self) -> Option<&Recipe> {
        match self {
            Form::View { recipe, .. } | Form::Edit { recipe, .. } => Some(recipe),
            Form::Create { .. } => None,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Form::View { recipe, .. } => format!("View {}", recipe.nome()),
            Form::Edit { recipe, .. } => format!("Edit {}", recipe.nome()),
            Form::Create { .. } => "New recipe".to_string(),
        }
    }

    pub fn actions(&self) -> &'static [FormAction] {
        match self {
            Form::View { .. } => &[FormAction::Close],
            Form::Edit { .. } => &[FormAction::Save, FormAction::Close],
            Form::Create { .. } => &[FormAction::Create, FormAction::Close],
        }
    }

    /// Inputs are disabled in read-only mode
    pub fn fields_disabled(&self) -> bool {
        matches!(self, Form::View { .. })
    }
}

/// The single form slot
#[derive(Debug, Clone, Default)]
pub struct RecipeModal {
    form: Option<Form>,
}

impl RecipeModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.form.is_some()
    }

    /// The open form, or `None` when there is nothing to render
    pub fn form(&self) -> Option<&Form> {
        self.form.as_ref()
    }

    pub fn mode(&self) -> Option<FormMode> {
        self.form.as_ref().map(Form::mode)
    }

    /// Show a recipe read-only
    pub fn open_view(&mut self, recipe: &Recipe) -> Result<()> {
        self.open(Form::View {
            draft: Draft::from_fields(&recipe.fields),
            recipe: recipe.clone(),
        })
    }

    /// Show a recipe editable, prefilled with its current values
    pub fn open_edit(&mut self, recipe: &Recipe) -> Result<()> {
        self.open(Form::Edit {
            draft: Draft::from_fields(&recipe.fields),
            recipe: recipe.clone(),
        })
    }

    /// Show the blank template
    pub fn open_create(&mut self) -> Result<()> {
        self.open(Form::Create {
            draft: Draft::from_fields(&RecipeFields::blank()),
        })
    }

    fn open(&mut self, form: Form) -> Result<()> {
        if let Some(current) = &self.form {
            if current.mode() != form.mode() {
                return Err(Error::ModalBusy(current.mode().as_str()));
            }
        }
        self.form = Some(form);
        Ok(())
    }

    /// Write a value into the draft under the field's key
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        match self.form.as_mut() {
            None => Err(Error::ModalClosed),
            Some(Form::View { .. }) => Err(Error::FieldDisabled(field.key())),
            Some(Form::Edit { draft, .. }) | Some(Form::Create { draft }) => draft.set(field, value),
        }
    }

    /// Normalize the draft into a save request and close the form
    pub fn save(&mut self) -> Result<SaveRequest> {
        let request = match self.form.as_ref() {
            None => return Err(Error::ModalClosed),
            Some(Form::View { .. }) => return Err(Error::SaveUnavailable),
            Some(Form::Edit { recipe, draft }) => {
                SaveRequest::Update(recipe.id.clone(), draft.normalize())
            }
            Some(Form::Create { draft }) => SaveRequest::Create(draft.normalize()),
        };
        self.form = None;
        Ok(request)
    }

    /// Discard the draft
    pub fn close(&mut self) {
        self.form = None;
    }
}
