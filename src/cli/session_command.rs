//! Line commands understood by the interactive `plan` session.

use crate::core::intake::IntakeField;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    // intake
    Set { field: IntakeField, value: String },
    Show,
    Submit,
    // review
    List,
    Toggle(String),
    Add { category: String, name: String },
    Categories,
    Progress,
    Details,
    Back,
    Export,
    Share,
    // any step
    Reset,
    Help,
    Quit,
}

pub const HELP: &str = "\
Trip form:
  set <field> <value>     fields: destination, start, end, type, style, gender, needs
  show                    show the form
  submit                  generate the packing list
Packing list:
  list                    show the list grouped by category
  toggle <id>             check / uncheck an item
  add <category> <name>   add a custom item (category: e.g. Clothing, Other)
  categories              list categories
  progress                show packing progress
  details                 show trip details
  back                    discard the list and return to the trip form
  export | share          not available yet
Anywhere:
  reset                   start over
  help                    this message
  quit                    leave the session";

impl SessionCommand {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> AppResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((v, r)) => (v, r.trim()),
            None => (line, ""),
        };

        let cmd = match verb.to_lowercase().as_str() {
            "set" => {
                let (key, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let field = IntakeField::parse(key)
                    .ok_or_else(|| AppError::InvalidField(key.to_string()))?;
                SessionCommand::Set {
                    field,
                    value: value.trim().to_string(),
                }
            }
            "show" => SessionCommand::Show,
            "submit" | "generate" => SessionCommand::Submit,
            "list" | "ls" => SessionCommand::List,
            "toggle" | "check" | "t" => {
                if rest.is_empty() {
                    return Err(AppError::InvalidCommand("toggle needs an item id".into()));
                }
                SessionCommand::Toggle(rest.to_string())
            }
            "add" => {
                let (category, name) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                SessionCommand::Add {
                    category: category.to_string(),
                    name: name.trim().to_string(),
                }
            }
            "categories" => SessionCommand::Categories,
            "progress" => SessionCommand::Progress,
            "details" => SessionCommand::Details,
            "back" => SessionCommand::Back,
            "export" => SessionCommand::Export,
            "share" => SessionCommand::Share,
            "reset" => SessionCommand::Reset,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            other => return Err(AppError::InvalidCommand(other.to_string())),
        };

        Ok(Some(cmd))
    }
}
