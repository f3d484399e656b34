//! pluglint - Lint Neovim/Vim plugin source trees against structure conventions
//!
//! This is the main entry point for the CLI application.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pluglint::cli::{self, Cli, Commands};
use pluglint::config::Config;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load_from_file(path),
        None => Config::load_or_default(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    };

    // Execute the appropriate command
    let result = match cli.command {
        Commands::Lint(args) => cli::commands::lint::execute(args, config).await,
        Commands::Rules(args) => cli::commands::rules::execute(args).await,
        Commands::Init(args) => cli::commands::init::execute(args).await,
        Commands::GenerateMan(args) => cli::commands::generate_man::execute(args).await,
    };

    // Handle exit codes for CI integration
    match result {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
