//! # CLI Module
//!
//! This module defines the command-line interface for pluglint using `clap`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `lint` | Lint a plugin source tree and report findings |
//! | `rules` | List the registered rules |
//! | `init` | Initialize a new configuration file |
//!
//! ## Submodules
//!
//! - [`commands`] - Command implementations
//! - [`exit_codes`] - Standardized exit codes
//! - [`output`] - Report renderers (text, JSON)
//!
//! ## Global Options
//!
//! - `-v, --verbose` - Increase verbosity level (use multiple times: -v, -vv, -vvv)
//! - `-c, --config <FILE>` - Path to configuration file
//!
//! ## Examples
//!
//! ```bash
//! # Lint the current directory, failing on errors only
//! pluglint lint .
//!
//! # Fail on warnings too, as JSON for other tooling
//! pluglint lint ~/src/demo.nvim --format json --fail-on warn
//!
//! # Only the help-doc checks
//! pluglint lint . --only helpdoc
//! ```

pub mod commands;
pub mod exit_codes;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{GenerateManArgs, InitArgs, LintArgs, RulesArgs};

/// pluglint - Lint Neovim/Vim plugin source trees against structure conventions
#[derive(Parser, Debug)]
#[command(name = "pluglint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lint a plugin source tree and report findings
    Lint(LintArgs),

    /// List the registered rules
    Rules(RulesArgs),

    /// Initialize a new configuration file
    Init(InitArgs),

    /// Generate man page (hidden, for packaging)
    #[command(hide = true)]
    GenerateMan(GenerateManArgs),
}
