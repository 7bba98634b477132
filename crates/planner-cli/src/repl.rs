//! Interactive REPL (Read-Eval-Print Loop) for the planner.
//!
//! `/add` and `/modify` walk through the kind's attributes one prompt at a
//! time.

use planner_core::{Planner, PlannerConfig};
use planner_models::{Attributes, EntityKind};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::commands::{describe_fields, Result};

/// Slash commands available in the REPL.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Prompt for every attribute and add the record
    Add(EntityKind),
    /// Delete a record
    Delete(EntityKind, String),
    /// Prompt for attributes to change on a record
    Modify(EntityKind, String),
    /// Show one record
    Show(EntityKind, String),
    /// List all records of a kind
    List(EntityKind),
    /// Show the attributes of a kind
    Fields(EntityKind),
    /// Show help
    Help,
    /// Quit the REPL
    Quit,
    /// Recognised command with bad arguments
    Invalid(String),
    /// Unknown command
    Unknown(String),
    /// Blank line
    Empty,
}

impl ReplCommand {
    /// Parses input into a REPL command.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();

        if input.is_empty() {
            return ReplCommand::Empty;
        }

        let Some(body) = input.strip_prefix('/') else {
            return ReplCommand::Unknown(input.to_string());
        };

        let mut parts = body.split_whitespace();
        let cmd = parts.next().unwrap_or_default().to_lowercase();
        let kind = parts.next().map(str::parse::<EntityKind>);
        let id = parts.next().map(str::to_string);

        let kind = match (cmd.as_str(), kind) {
            ("help" | "h" | "?", _) => return ReplCommand::Help,
            ("quit" | "q" | "exit", _) => return ReplCommand::Quit,
            ("add" | "delete" | "del" | "modify" | "mod" | "show" | "find" | "list" | "ls"
            | "fields", None) => {
                return ReplCommand::Invalid(format!("/{} requires an entity kind", cmd))
            }
            (_, Some(Err(e))) => return ReplCommand::Invalid(e.to_string()),
            (_, Some(Ok(kind))) => kind,
            (_, None) => return ReplCommand::Unknown(cmd),
        };

        match (cmd.as_str(), id) {
            ("add", _) => ReplCommand::Add(kind),
            ("list" | "ls", _) => ReplCommand::List(kind),
            ("fields", _) => ReplCommand::Fields(kind),
            ("delete" | "del", Some(id)) => ReplCommand::Delete(kind, id),
            ("modify" | "mod", Some(id)) => ReplCommand::Modify(kind, id),
            ("show" | "find", Some(id)) => ReplCommand::Show(kind, id),
            ("delete" | "del" | "modify" | "mod" | "show" | "find", None) => {
                ReplCommand::Invalid(format!("/{} requires a {} ID", cmd, kind))
            }
            _ => ReplCommand::Unknown(cmd),
        }
    }
}

/// REPL state
pub struct Repl {
    editor: DefaultEditor,
    planner: Planner,
    history_path: std::path::PathBuf,
}

impl Repl {
    /// Creates a new REPL over the configured stores.
    pub fn new(config: &PlannerConfig) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;
        let planner = Planner::open(config)?;

        let history_path = config.history_path();
        if history_path.exists() {
            let _ = editor.load_history(&history_path);
        }

        Ok(Self {
            editor,
            planner,
            history_path,
        })
    }

    /// Runs the REPL loop.
    pub fn run(&mut self) -> Result<()> {
        println!("Planner REPL v{}", env!("CARGO_PKG_VERSION"));
        println!("Type /help for commands, /quit to exit\n");

        loop {
            match self.editor.readline("planner> ") {
                Ok(line) => {
                    self.editor.add_history_entry(&line)?;

                    let cmd = ReplCommand::parse(&line);
                    debug!(?cmd, "Parsed command");

                    match self.handle_command(cmd) {
                        Ok(true) => break,
                        Ok(false) => {}
                        Err(e) => eprintln!("Error: {}", e),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(parent) = self.history_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = self.editor.save_history(&self.history_path);

        println!("Goodbye!");
        Ok(())
    }

    /// Handles a REPL command. Returns Ok(true) if should quit.
    fn handle_command(&mut self, cmd: ReplCommand) -> Result<bool> {
        match cmd {
            ReplCommand::Add(kind) => {
                if let Some(attrs) = self.prompt_attributes(kind, false)? {
                    println!("{}", self.planner.add(&attrs)?);
                }
            }
            ReplCommand::Delete(kind, id) => {
                println!("{}", self.planner.delete(kind, &id)?);
            }
            ReplCommand::Modify(kind, id) => {
                if !self.planner.contains(kind, &id) {
                    println!("{} not found.", kind.label());
                } else if let Some(attrs) = self.prompt_attributes(kind, true)? {
                    println!("{}", self.planner.modify(&id, &attrs)?);
                }
            }
            ReplCommand::Show(kind, id) => {
                println!("{}", self.planner.display(kind, &id));
            }
            ReplCommand::List(kind) => {
                let lines = self.planner.list(kind);
                if lines.is_empty() {
                    println!("No {} found.", kind.plural());
                }
                for line in lines {
                    println!("{}", line);
                }
            }
            ReplCommand::Fields(kind) => println!("{}", describe_fields(kind)),
            ReplCommand::Help => print_help(),
            ReplCommand::Quit => return Ok(true),
            ReplCommand::Invalid(reason) => println!("{}", reason),
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}. Type /help for available commands.", cmd);
            }
            ReplCommand::Empty => {}
        }
        Ok(false)
    }

    /// Prompts for each attribute of `kind`.
    ///
    /// For updates the identifier is skipped and blank answers leave the
    /// attribute unchanged. Returns `None` if the operator cancels.
    fn prompt_attributes(&mut self, kind: EntityKind, update: bool) -> Result<Option<Attributes>> {
        let mut attrs = Attributes::new(kind);
        if update {
            println!("Leave a field blank to keep its current value.");
        }

        for name in kind.attributes() {
            if update && *name == kind.id_attribute() {
                continue;
            }

            let prompt = format!("Enter {}: ", attribute_label(name));
            let value = match self.editor.readline(&prompt) {
                Ok(value) => value,
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                    println!("Cancelled.");
                    return Ok(None);
                }
                Err(e) => return Err(e.into()),
            };

            if update && value.trim().is_empty() {
                continue;
            }
            attrs.insert(*name, value.trim())?;
        }

        Ok(Some(attrs))
    }
}

/// Turns `job_title` into `Job Title`.
pub fn attribute_label(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn print_help() {
    println!("Planner REPL Commands:");
    println!();
    println!("  /add <kind>            Add a record (prompts for each attribute)");
    println!("  /delete <kind> <id>    Delete a record");
    println!("  /modify <kind> <id>    Change a record (blank input keeps a value)");
    println!("  /show <kind> <id>      Show a record");
    println!("  /list <kind>           List all records of a kind");
    println!("  /fields <kind>         Show the attributes of a kind");
    println!("  /help, /h, /?          Show this help");
    println!("  /quit, /q, /exit       Exit the REPL");
    println!();
    println!("Kinds: employee, event, client, guest, supplier, venue");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        assert_eq!(
            ReplCommand::parse("/add employee"),
            ReplCommand::Add(EntityKind::Employee)
        );
    }

    #[test]
    fn test_parse_with_id() {
        assert_eq!(
            ReplCommand::parse("/delete supplier S1"),
            ReplCommand::Delete(EntityKind::Supplier, "S1".to_string())
        );
        assert_eq!(
            ReplCommand::parse("/find guests G1"),
            ReplCommand::Show(EntityKind::Guest, "G1".to_string())
        );
        assert_eq!(
            ReplCommand::parse("/mod venue V2"),
            ReplCommand::Modify(EntityKind::Venue, "V2".to_string())
        );
    }

    #[test]
    fn test_parse_missing_id() {
        assert!(matches!(
            ReplCommand::parse("/show event"),
            ReplCommand::Invalid(_)
        ));
    }

    #[test]
    fn test_parse_missing_kind() {
        assert!(matches!(ReplCommand::parse("/list"), ReplCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_bad_kind() {
        assert_eq!(
            ReplCommand::parse("/list caterers"),
            ReplCommand::Invalid("unknown entity kind: caterers".to_string())
        );
    }

    #[test]
    fn test_parse_quit_and_help() {
        assert_eq!(ReplCommand::parse("/quit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/q"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/?"), ReplCommand::Help);
    }

    #[test]
    fn test_parse_empty_and_unknown() {
        assert_eq!(ReplCommand::parse("   "), ReplCommand::Empty);
        assert_eq!(
            ReplCommand::parse("/frobnicate guest"),
            ReplCommand::Unknown("frobnicate".to_string())
        );
        assert!(matches!(ReplCommand::parse("hello"), ReplCommand::Unknown(_)));
    }

    #[test]
    fn test_attribute_label() {
        assert_eq!(attribute_label("job_title"), "Job Title");
        assert_eq!(attribute_label("emp_id"), "Emp Id");
        assert_eq!(attribute_label("furniture_supply_company"), "Furniture Supply Company");
    }
}
