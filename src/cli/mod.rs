pub mod count;
pub mod lint;
pub mod schema;

use crate::config::Provider;
use crate::report::Report;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "danger-pep8")]
#[command(
    author,
    version,
    about = "Danger plugin that reports flake8 (PEP 8) violations in code review"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run flake8 and report findings
    Lint(LintArgs),

    /// Run flake8 in count mode and warn on the total
    Count(CountArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct LintArgs {
    /// Path to config file
    #[arg(short, long, default_value = "danger-pep8.yaml")]
    pub config: PathBuf,

    /// Override the directory flake8 scans
    #[arg(long)]
    pub base_dir: Option<String>,

    /// Override the config file passed to flake8 via --config
    #[arg(long)]
    pub flake8_config: Option<String>,

    /// Override the reporting threshold
    #[arg(long)]
    pub threshold: Option<usize>,

    /// Report one inline comment per finding instead of a table
    #[arg(long)]
    pub inline: bool,

    /// Override the hosting provider (github, or anything else)
    #[arg(long)]
    pub provider: Option<Provider>,

    /// Override the report directory
    #[arg(long)]
    pub report_dir: Option<PathBuf>,

    /// Exit 1 if anything was reported (CI mode)
    #[arg(long)]
    pub fail_on_issues: bool,
}

#[derive(Parser, Clone)]
pub struct CountArgs {
    /// Path to config file
    #[arg(short, long, default_value = "danger-pep8.yaml")]
    pub config: PathBuf,

    /// Override the directory flake8 scans
    #[arg(long)]
    pub base_dir: Option<String>,

    /// Override the reporting threshold
    #[arg(long)]
    pub threshold: Option<usize>,

    /// Override the report directory
    #[arg(long)]
    pub report_dir: Option<PathBuf>,

    /// Exit 1 if anything was reported (CI mode)
    #[arg(long)]
    pub fail_on_issues: bool,
}

/// Echo the report to stdout for interactive runs; the host reads the
/// persisted report.json.
pub(crate) fn print_report(report: &Report) {
    for block in &report.markdowns {
        println!("{}", block.message);
    }
    for warning in &report.warnings {
        println!("warning: {}", warning);
    }
    for message in &report.messages {
        println!("{}", message);
    }
}
