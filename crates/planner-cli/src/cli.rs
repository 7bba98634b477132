//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use planner_core::config::STATE_DIR_ENV;
use planner_models::EntityKind;
use std::path::PathBuf;

/// Planner - manage employees, events, clients, guests, suppliers and venues
#[derive(Parser, Debug)]
#[command(name = "planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to state directory
    #[arg(short, long, env = STATE_DIR_ENV)]
    pub state_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a record; every attribute must be given
    Add {
        /// Entity kind (employee, event, client, guest, supplier, venue)
        kind: EntityKind,

        /// Attribute value as name=value (repeatable)
        #[arg(short = 's', long = "set", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },

    /// Delete a record by ID
    Delete {
        kind: EntityKind,

        #[arg(required = true)]
        id: String,
    },

    /// Change attributes of an existing record
    Modify {
        kind: EntityKind,

        #[arg(required = true)]
        id: String,

        /// Attribute value as name=value (repeatable)
        #[arg(short = 's', long = "set", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },

    /// Show one record
    Show {
        kind: EntityKind,

        #[arg(required = true)]
        id: String,
    },

    /// List all records of a kind
    List {
        kind: EntityKind,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show the attributes a kind expects
    Fields { kind: EntityKind },

    /// Start interactive REPL mode
    Repl,
}

/// Output format for list commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Parses `name=value`. The value may be empty or contain further `=`.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing attribute name in '{}'", raw));
    }
    Ok((name.to_string(), value.to_string()))
}

impl Cli {
    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
