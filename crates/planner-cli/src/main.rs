//! Planner CLI entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use planner_cli::cli::{Cli, Commands};
use planner_cli::commands;
use planner_cli::repl::Repl;
use planner_core::PlannerConfig;

fn main() {
    // Load .env.local if it exists (for PLANNER_STATE_DIR etc.)
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt().with_env_filter(filter).with_target(false).init();

    let config = PlannerConfig::resolve(cli.state_dir.clone());

    // Handle command or enter REPL
    let result = match cli.command {
        Some(Commands::Repl) | None => run_repl(&config),
        Some(cmd) => commands::execute(cmd, &config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_repl(config: &PlannerConfig) -> commands::Result<()> {
    let mut repl = Repl::new(config)?;
    repl.run()?;
    Ok(())
}
