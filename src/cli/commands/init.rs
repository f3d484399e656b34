//! Init command - Initialize a new configuration file

use colored::Colorize;
use std::fs;
use std::path::Path;

use super::InitArgs;
use crate::cli::exit_codes;
use crate::config::loader::CONFIG_FILENAME;
use crate::config::Config;
use crate::error::{ConfigError, PluglintError};

pub async fn execute(args: InitArgs) -> Result<i32, PluglintError> {
    let config_path = Path::new(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(PluglintError::Config(ConfigError::AlreadyExists {
            path: CONFIG_FILENAME.to_string(),
        }));
    }

    let config = Config::default();
    let content = config.to_toml()?;

    fs::write(config_path, &content).map_err(|e| {
        PluglintError::Config(ConfigError::FileWrite {
            path: CONFIG_FILENAME.to_string(),
            source: e,
        })
    })?;

    println!(
        "{} Created {}",
        "Success:".green().bold(),
        CONFIG_FILENAME.cyan()
    );

    println!("\nNext steps:");
    println!("  1. Review and customize {}", CONFIG_FILENAME.cyan());
    println!("  2. Run {} to lint your plugin", "pluglint lint .".cyan());

    Ok(exit_codes::SUCCESS)
}
