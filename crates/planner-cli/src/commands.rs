//! Command handlers for CLI subcommands.

use planner_core::{Planner, PlannerConfig};
use planner_models::{Attributes, EntityKind};
use tracing::debug;

use crate::cli::{Commands, OutputFormat};

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Execute a CLI command, printing its output.
pub fn execute(command: Commands, config: &PlannerConfig) -> Result<()> {
    let output = run(command, config)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

/// Execute a CLI command and return what it would print.
pub fn run(command: Commands, config: &PlannerConfig) -> Result<String> {
    debug!(?command, "Running command");

    if let Commands::Fields { kind } = command {
        return Ok(describe_fields(kind));
    }

    let mut planner = Planner::open(config)?;

    match command {
        Commands::Add { kind, set } => {
            let attrs = Attributes::from_pairs(kind, set)?;
            Ok(planner.add(&attrs)?)
        }
        Commands::Delete { kind, id } => Ok(planner.delete(kind, &id)?),
        Commands::Modify { kind, id, set } => {
            let attrs = Attributes::from_pairs(kind, set)?;
            Ok(planner.modify(&id, &attrs)?)
        }
        Commands::Show { kind, id } => Ok(planner.display(kind, &id)),
        Commands::List { kind, format } => list(&planner, kind, format),
        Commands::Fields { .. } | Commands::Repl => {
            // Fields is answered above; REPL is handled separately in main
            Ok(String::new())
        }
    }
}

fn list(planner: &Planner, kind: EntityKind, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(planner.list_json(kind)?),
        OutputFormat::Table => {
            let lines = planner.list(kind);
            if lines.is_empty() {
                return Ok(format!("No {} found.", kind.plural()));
            }
            Ok(lines.join("\n"))
        }
    }
}

/// Lists the attributes of `kind`, identifier first.
pub fn describe_fields(kind: EntityKind) -> String {
    let mut out = format!("{} attributes:", kind.label());
    for name in kind.attributes() {
        out.push_str("\n  ");
        out.push_str(name);
        if *name == kind.id_attribute() {
            out.push_str(" (identifier)");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn add_venue(config: &PlannerConfig, id: &str) -> String {
        run(
            Commands::Add {
                kind: EntityKind::Venue,
                set: pairs(&[
                    ("venue_id", id),
                    ("name", "Great Hall"),
                    ("address", "5 Park Ave"),
                    ("contact_details", "hall@example.com"),
                    ("min_guests", "50"),
                    ("max_guests", "300"),
                ]),
            },
            config,
        )
        .unwrap()
    }

    #[test]
    fn test_add_show_delete() {
        let dir = tempdir().unwrap();
        let config = PlannerConfig::new(dir.path());

        assert_eq!(add_venue(&config, "V1"), "Venue added successfully.");
        assert_eq!(add_venue(&config, "V1"), "A venue with this ID already exists.");

        let shown = run(
            Commands::Show {
                kind: EntityKind::Venue,
                id: "V1".to_string(),
            },
            &config,
        )
        .unwrap();
        assert!(shown.starts_with("Venue ID: V1, Name: Great Hall"));

        let deleted = run(
            Commands::Delete {
                kind: EntityKind::Venue,
                id: "V1".to_string(),
            },
            &config,
        )
        .unwrap();
        assert_eq!(deleted, "Venue deleted successfully.");
    }

    #[test]
    fn test_modify_unknown_attribute_is_an_error() {
        let dir = tempdir().unwrap();
        let config = PlannerConfig::new(dir.path());
        add_venue(&config, "V1");

        let result = run(
            Commands::Modify {
                kind: EntityKind::Venue,
                id: "V1".to_string(),
                set: pairs(&[("capacity", "10")]),
            },
            &config,
        );

        let err = result.unwrap_err().to_string();
        assert!(err.contains("capacity"));
    }

    #[test]
    fn test_list_table_empty() {
        let dir = tempdir().unwrap();
        let config = PlannerConfig::new(dir.path());

        let output = run(
            Commands::List {
                kind: EntityKind::Client,
                format: OutputFormat::Table,
            },
            &config,
        )
        .unwrap();
        assert_eq!(output, "No clients found.");
    }

    #[test]
    fn test_describe_fields() {
        let text = describe_fields(EntityKind::Guest);
        assert_eq!(
            text,
            "Guest attributes:\n  guest_id (identifier)\n  name\n  address\n  contact_details"
        );
    }
}
