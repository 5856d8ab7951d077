// src/prompt.rs

//! Line-based prompts for filling in the recipe form
//!
//! Each editable field is offered with its current draft value. An empty
//! answer keeps the value, a single `-` clears it, anything else replaces
//! it. End of input keeps the remaining values and declines to save.

use std::io::{BufRead, Write};

use crate::api::RecipeApi;
use crate::error::{Error, Result};
use crate::modal::{Field, FormMode};
use crate::render::kind_options;
use crate::session::RecipeBook;

/// Answer that clears a field
pub const CLEAR_MARKER: &str = "-";

/// Prompts reading answers from `input` and writing questions to `output`
pub struct FormPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> FormPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Walk every field of the open form, then ask whether to save
    ///
    /// Returns `Ok(true)` when the user confirms. The form must be open in
    /// edit or create mode.
    pub fn fill<A: RecipeApi>(&mut self, book: &mut RecipeBook<A>) -> Result<bool> {
        match book.modal().mode() {
            None => return Err(Error::ModalClosed),
            Some(FormMode::View) => return Err(Error::SaveUnavailable),
            Some(FormMode::Edit) | Some(FormMode::Create) => {}
        }

        for field in Field::ALL {
            if !self.ask_field(book, field)? {
                return Ok(false);
            }
        }
        self.confirm("Save?")
    }

    /// Ask for one field; `Ok(false)` on end of input
    fn ask_field<A: RecipeApi>(&mut self, book: &mut RecipeBook<A>, field: Field) -> Result<bool> {
        loop {
            let current = book
                .modal()
                .form()
                .map(|form| form.draft().get(field).to_string())
                .ok_or(Error::ModalClosed)?;

            if field == Field::Tipo {
                writeln!(self.output, "  {}", kind_options())?;
            }
            write!(self.output, "{} [{}]: ", field.label(), current)?;
            self.output.flush()?;

            let Some(answer) = self.read_answer()? else {
                return Ok(false);
            };
            let value = match answer.as_str() {
                "" => return Ok(true),
                CLEAR_MARKER => String::new(),
                _ => answer,
            };

            match book.set_field(field, value) {
                Ok(()) => return Ok(true),
                Err(Error::InvalidKind(kind)) => {
                    writeln!(self.output, "Unknown kind '{}'. Please try again.", kind)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Yes/no question defaulting to yes; end of input means no
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        loop {
            write!(self.output, "{} [Y/n]: ", question)?;
            self.output.flush()?;

            let Some(answer) = self.read_answer()? else {
                return Ok(false);
            };
            match answer.trim().to_lowercase().as_str() {
                "" | "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Unknown option. Please try again.")?,
            }
        }
    }

    /// One line without its terminator, `None` at end of input
    fn read_answer(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).to_string();
        Ok(Some(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MemoryRecipeApi;
    use crate::recipe::{Recipe, RecipeFields, RecipeId};
    use std::io::Cursor;

    fn book() -> RecipeBook<MemoryRecipeApi> {
        let recipe = Recipe::new(
            RecipeId::new("1"),
            RecipeFields {
                nome: "Pudim".to_string(),
                ingredientes: "leite".to_string(),
                ..RecipeFields::blank()
            },
        );
        let mut book = RecipeBook::new(MemoryRecipeApi::with_recipes(vec![recipe]));
        book.load();
        book
    }

    fn draft_value(book: &RecipeBook<MemoryRecipeApi>, field: Field) -> String {
        book.modal().form().unwrap().draft().get(field).to_string()
    }

    #[test]
    fn test_keep_replace_and_clear() {
        let mut book = book();
        book.open_edit(&RecipeId::new("1")).unwrap();

        // nome kept, tipo set, ingredientes cleared, rest kept, then save
        let input = "\nDOCE\n-\n\n\n\n\n";
        let mut output = Vec::new();
        let confirmed = FormPrompt::new(Cursor::new(input), &mut output)
            .fill(&mut book)
            .unwrap();

        assert!(confirmed);
        assert_eq!(draft_value(&book, Field::Nome), "Pudim");
        assert_eq!(draft_value(&book, Field::Tipo), "DOCE");
        assert_eq!(draft_value(&book, Field::Ingredientes), "");

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Name [Pudim]: "));
        assert!(shown.contains("Save? [Y/n]: "));
    }

    #[test]
    fn test_invalid_kind_is_asked_again() {
        let mut book = book();
        book.open_create().unwrap();

        let input = "Bolo\ndoce\nDOCE\n\n\n\n\nn\n";
        let mut output = Vec::new();
        let confirmed = FormPrompt::new(Cursor::new(input), &mut output)
            .fill(&mut book)
            .unwrap();

        assert!(!confirmed);
        assert_eq!(draft_value(&book, Field::Nome), "Bolo");
        assert_eq!(draft_value(&book, Field::Tipo), "DOCE");
        assert!(String::from_utf8(output).unwrap().contains("Unknown kind 'doce'"));
    }

    #[test]
    fn test_end_of_input_declines() {
        let mut book = book();
        book.open_create().unwrap();

        let confirmed = FormPrompt::new(Cursor::new("Bolo\n"), Vec::new())
            .fill(&mut book)
            .unwrap();
        assert!(!confirmed);
        assert_eq!(draft_value(&book, Field::Nome), "Bolo");
    }

    #[test]
    fn test_view_form_cannot_be_filled() {
        let mut book = book();
        book.open_view(&RecipeId::new("1")).unwrap();
        let result = FormPrompt::new(Cursor::new(""), Vec::new()).fill(&mut book);
        assert!(matches!(result, Err(Error::SaveUnavailable)));
    }
}
