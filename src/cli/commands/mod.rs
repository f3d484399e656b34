//! CLI commands module

pub mod generate_man;
pub mod init;
pub mod lint;
pub mod rules;

use clap::Args;
use std::path::PathBuf;

use crate::rules::results::Severity;

/// Arguments for the lint command
#[derive(Args, Debug)]
pub struct LintArgs {
    /// Root of the plugin source tree to lint
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Lowest severity that fails the run
    #[arg(long, value_name = "SEVERITY")]
    pub fail_on: Option<FailOn>,

    /// Only run specific rules
    #[arg(long, value_delimiter = ',')]
    pub only: Option<Vec<String>>,

    /// Skip specific rules
    #[arg(long, value_delimiter = ',')]
    pub skip: Option<Vec<String>>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Per-file read timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Maximum number of concurrent file reads
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,
}

/// Arguments for the rules command
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the generate-man command
#[derive(Args, Debug)]
pub struct GenerateManArgs {
    /// Directory to write the man page into
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

/// Output format for the lint and rules commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Severity threshold for failing the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FailOn {
    Error,
    Warn,
}

impl FailOn {
    /// The severity this threshold corresponds to
    pub fn severity(self) -> Severity {
        match self {
            FailOn::Error => Severity::Error,
            FailOn::Warn => Severity::Warn,
        }
    }
}
