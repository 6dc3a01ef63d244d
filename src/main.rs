use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod command;
mod config;
mod error;
mod output;
mod parser;
mod plugin;
mod provider;
mod report;
mod runner;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("danger_pep8=debug")
    } else {
        EnvFilter::new("danger_pep8=warn")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Lint(args) => cli::lint::execute(args),
        Commands::Count(args) => cli::count::execute(args),
        Commands::Schema => cli::schema::execute(),
    }
}
