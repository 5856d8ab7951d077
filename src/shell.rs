// src/shell.rs

//! Interactive single-page session
//!
//! Loads the collection once, shows the cards and then reads commands
//! until `quit` or end of input. Cards are addressed by their 1-based
//! position, falling back to the recipe id.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::api::RecipeApi;
use crate::error::{Error, Result};
use crate::modal::Field;
use crate::prompt::FormPrompt;
use crate::recipe::RecipeId;
use crate::render::{render_cards, render_modal};
use crate::session::RecipeBook;

const HELP: &str = "\
Commands:
  list                 show all recipe cards
  view N               open recipe N read-only
  edit N               open recipe N for editing
  new                  open a blank recipe form
  set FIELD VALUE      change a field of the open form
  fill                 answer prompts for every field of the open form
  save                 save the open form
  close                close the open form without saving
  delete N             delete recipe N
  reload               fetch the collection again
  help                 show this help
  quit                 leave
Fields: nome, tipo, ingredientes, modoFazer, img, custoAproximado";

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Empty,
    List,
    View(String),
    Edit(String),
    New,
    Set(Field, String),
    Fill,
    Save,
    Close,
    Delete(String),
    Reload,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = String;

    /// Values given to `set` are kept as typed, surrounding spaces included
    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim_end_matches(&['\n', '\r'][..]).trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line, ""),
        };

        let target = |name: &str| {
            let target = rest.trim_end();
            if target.is_empty() {
                Err(format!("usage: {name} N"))
            } else {
                Ok(target.to_string())
            }
        };

        match word {
            "" => Ok(ShellCommand::Empty),
            "list" | "ls" => Ok(ShellCommand::List),
            "view" | "v" => target("view").map(ShellCommand::View),
            "edit" | "e" => target("edit").map(ShellCommand::Edit),
            "new" | "create" | "c" => Ok(ShellCommand::New),
            "delete" | "d" | "rm" => target("delete").map(ShellCommand::Delete),
            "set" => {
                let (key, value) = match rest.split_once(char::is_whitespace) {
                    Some((key, value)) => (key, value),
                    None => (rest, ""),
                };
                if key.is_empty() {
                    return Err("usage: set FIELD VALUE".to_string());
                }
                let field = key.parse::<Field>().map_err(|e| e.to_string())?;
                Ok(ShellCommand::Set(field, value.to_string()))
            }
            "fill" => Ok(ShellCommand::Fill),
            "save" => Ok(ShellCommand::Save),
            "close" => Ok(ShellCommand::Close),
            "reload" => Ok(ShellCommand::Reload),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            other => Err(format!("Unknown command '{other}'. Type 'help' for commands.")),
        }
    }
}

/// Interactive session over a recipe book
pub struct Shell<A: RecipeApi, R, W> {
    book: RecipeBook<A>,
    input: R,
    output: W,
}

impl<A: RecipeApi, R: BufRead, W: Write> Shell<A, R, W> {
    pub fn new(book: RecipeBook<A>, input: R, output: W) -> Self {
        Self {
            book,
            input,
            output,
        }
    }

    pub fn book(&self) -> &RecipeBook<A> {
        &self.book
    }

    /// Load, show the cards, then process commands until quit
    pub fn run(&mut self) -> Result<()> {
        self.book.load();
        self.show_cards()?;

        loop {
            write!(self.output, "receitas> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(());
            }

            let command = match line.parse::<ShellCommand>() {
                Ok(command) => command,
                Err(message) => {
                    writeln!(self.output, "{}", message)?;
                    continue;
                }
            };
            if command == ShellCommand::Quit {
                return Ok(());
            }

            match self.execute(command) {
                Ok(()) => {}
                Err(Error::Io(e)) => return Err(Error::Io(e)),
                Err(e) => writeln!(self.output, "error: {}", e)?,
            }
        }
    }

    /// Run one command against the book
    pub fn execute(&mut self, command: ShellCommand) -> Result<()> {
        match command {
            ShellCommand::Empty | ShellCommand::Quit => Ok(()),
            ShellCommand::List => self.show_cards(),
            ShellCommand::View(target) => {
                let id = self.resolve(&target)?;
                self.book.open_view(&id)?;
                self.show_form()
            }
            ShellCommand::Edit(target) => {
                let id = self.resolve(&target)?;
                self.book.open_edit(&id)?;
                self.show_form()
            }
            ShellCommand::New => {
                self.book.open_create()?;
                self.show_form()
            }
            ShellCommand::Set(field, value) => {
                self.book.set_field(field, value)?;
                self.show_form()
            }
            ShellCommand::Fill => {
                let confirmed =
                    FormPrompt::new(&mut self.input, &mut self.output).fill(&mut self.book)?;
                if confirmed {
                    self.book.save()?;
                    self.show_cards()
                } else {
                    self.show_form()
                }
            }
            ShellCommand::Save => {
                self.book.save()?;
                self.show_cards()
            }
            ShellCommand::Close => {
                self.book.close();
                Ok(())
            }
            ShellCommand::Delete(target) => {
                let id = self.resolve(&target)?;
                self.book.delete(&id);
                self.show_cards()
            }
            ShellCommand::Reload => {
                self.book.load();
                self.show_cards()
            }
            ShellCommand::Help => {
                writeln!(self.output, "{}", HELP)?;
                Ok(())
            }
        }
    }

    /// Card position first, then recipe id
    fn resolve(&self, target: &str) -> Result<RecipeId> {
        let catalog = self.book.catalog();
        if let Some(recipe) = target.parse::<usize>().ok().and_then(|p| catalog.at_position(p)) {
            return Ok(recipe.id.clone());
        }
        let id = RecipeId::new(target);
        self.book.recipe(&id).map(|recipe| recipe.id.clone())
    }

    fn show_cards(&mut self) -> Result<()> {
        write!(self.output, "{}", render_cards(self.book.catalog()))?;
        Ok(())
    }

    fn show_form(&mut self) -> Result<()> {
        if let Some(form) = render_modal(self.book.modal()) {
            write!(self.output, "{}", form)?;
        }
        Ok(())
    }
}
