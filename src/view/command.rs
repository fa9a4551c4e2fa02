use thiserror::Error;

use super::render::{render_form, render_list};
use crate::catalog::CatalogStore;
use crate::error::CatalogError;
use crate::movie::{parse_number, DraftField, DraftValue};

pub const HELP: &str = "\
commands:
  search <text>          filter by title (empty clears)
  min-rating <number>    filter by minimum rating, 0 to 5
  set <field> <value>    edit the draft (title, description, posterURL, rating)
  add                    add the draft to the list
  list                   show the filtered list
  draft                  show the draft
  snapshot               print the full state as JSON
  help                   show this help
  quit                   exit";

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("unknown command: {0} (try `help`)")]
    UnknownCommand(String),
    #[error("`set` needs a field name")]
    MissingField,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// One line of user input, already mapped onto a store operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search(String),
    MinRating(f64),
    Set(DraftField, DraftValue),
    Add,
    List,
    Draft,
    Snapshot,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line.trim_end(), ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "search" => Ok(Command::Search(rest.trim_end().to_string())),
            "min-rating" | "rating" => Ok(Command::MinRating(parse_number(rest))),
            "set" => {
                let rest = rest.trim_start();
                let (name, value) = match rest.split_once(char::is_whitespace) {
                    Some((name, value)) => (name, value),
                    None => (rest.trim_end(), ""),
                };
                if name.is_empty() {
                    return Err(CommandError::MissingField);
                }
                let field: DraftField = name.parse()?;
                let value = match field {
                    DraftField::Rating => DraftValue::Number(parse_number(value)),
                    _ => DraftValue::Text(value.to_string()),
                };
                Ok(Command::Set(field, value))
            }
            "add" => Ok(Command::Add),
            "list" | "" => Ok(Command::List),
            "draft" => Ok(Command::Draft),
            "snapshot" => Ok(Command::Snapshot),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

/// What the front end should do after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Print(String),
    Quit,
}

/// Forward a command to the store and describe the result.
pub fn dispatch(store: &mut CatalogStore, command: Command) -> Outcome {
    match command {
        Command::Search(query) => {
            store.set_title_filter(query);
            Outcome::Print(render_list(&store.filtered_view()))
        }
        Command::MinRating(value) => {
            store.set_rating_filter(value);
            Outcome::Print(render_list(&store.filtered_view()))
        }
        Command::Set(field, value) => {
            store.update_draft_field(field, value);
            Outcome::Print(render_form(store.draft(), store.form_error()))
        }
        Command::Add => match store.commit_draft() {
            Ok(id) => {
                let title = store
                    .get(&id)
                    .map(|movie| movie.title().to_string())
                    .unwrap_or_default();
                Outcome::Print(format!(
                    "Added {} ({})\n\n{}",
                    title,
                    id,
                    render_list(&store.filtered_view())
                ))
            }
            Err(_) => Outcome::Print(render_form(store.draft(), store.form_error())),
        },
        Command::List => Outcome::Print(render_list(&store.filtered_view())),
        Command::Draft => Outcome::Print(render_form(store.draft(), store.form_error())),
        Command::Snapshot => match serde_json::to_string_pretty(&store.snapshot()) {
            Ok(json) => Outcome::Print(json),
            Err(err) => Outcome::Print(format!("failed to encode snapshot: {}", err)),
        },
        Command::Help => Outcome::Print(HELP.to_string()),
        Command::Quit => Outcome::Quit,
    }
}
