//! Role classification by path shape
//!
//! Classification is a pure mapping from the repository-relative path to an
//! enumerated role. No file content is inspected here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The role a file plays in a plugin source tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Loaded eagerly at editor startup (`plugin/`, `after/plugin/`)
    EntryPoint,
    /// Loaded on first `require` (`lua/`)
    LazyModule,
    /// Loaded when a matching filetype is opened (`ftplugin/`, `after/ftplugin/`)
    FiletypeScript,
    /// Diagnostic self-check module (`lua/**/health.lua`)
    HealthModule,
    /// In-editor help document (`doc/*.txt`)
    HelpDoc,
    /// Anything else; retained but never evaluated by rules
    Unknown,
}

impl Role {
    /// Whether this role participates in rule evaluation
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Role::Unknown)
    }

    /// Stable kebab-case name, as used in reports
    pub fn name(&self) -> &'static str {
        match self {
            Role::EntryPoint => "entry-point",
            Role::LazyModule => "lazy-module",
            Role::FiletypeScript => "filetype-script",
            Role::HealthModule => "health-module",
            Role::HelpDoc => "help-doc",
            Role::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a repository-relative path into a [`Role`].
///
/// Deterministic and reproducible: the same path always maps to the same
/// role. Backslashes are normalized so Windows paths classify identically.
pub fn classify(path: &str) -> Role {
    let normalized = path.replace('\\', "/");
    let components: Vec<&str> = normalized.split('/').collect();

    let file_name = match components.last() {
        Some(name) if !name.is_empty() => *name,
        _ => return Role::Unknown,
    };

    match components.first().copied() {
        Some("plugin") if is_script(file_name) => Role::EntryPoint,
        Some("ftplugin") if is_script(file_name) => Role::FiletypeScript,
        Some("after") => match components.get(1).copied() {
            Some("plugin") if is_script(file_name) => Role::EntryPoint,
            Some("ftplugin") if is_script(file_name) => Role::FiletypeScript,
            _ => Role::Unknown,
        },
        Some("lua") if file_name.ends_with(".lua") => {
            if is_health_module(&components) {
                Role::HealthModule
            } else {
                Role::LazyModule
            }
        }
        // Help files live directly under doc/, never nested
        Some("doc") if components.len() == 2 && file_name.ends_with(".txt") => Role::HelpDoc,
        _ => Role::Unknown,
    }
}

fn is_script(file_name: &str) -> bool {
    file_name.ends_with(".lua") || file_name.ends_with(".vim")
}

/// `lua/**/health.lua` and `lua/**/health/init.lua` are both valid
/// health-check locations.
fn is_health_module(components: &[&str]) -> bool {
    match components {
        [.., "health.lua"] => components.len() > 1,
        [.., "health", "init.lua"] => true,
        _ => false,
    }
}
