//! Rules command - list the registered rules

use colored::Colorize;
use serde::Serialize;

use super::{OutputFormat, RulesArgs};
use crate::cli::exit_codes;
use crate::error::PluglintError;
use crate::rules::engine::registry;

#[derive(Serialize)]
struct RuleEntry {
    name: &'static str,
    summary: &'static str,
}

/// Execute the rules command
pub async fn execute(args: RulesArgs) -> Result<i32, PluglintError> {
    let entries: Vec<RuleEntry> = registry()
        .iter()
        .map(|rule| RuleEntry {
            name: rule.name(),
            summary: rule.summary(),
        })
        .collect();

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Text => {
            println!("{}", "Registered rules:".bold());
            for entry in entries {
                println!("  {:<10} {}", entry.name.cyan(), entry.summary);
            }
        }
    }

    Ok(exit_codes::SUCCESS)
}
