//! Configuration module

pub mod loader;

pub use loader::Config;

use serde::{Deserialize, Serialize};

/// Per-rule configuration override
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether the rule is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Severity override (ok, warn, error)
    pub severity: Option<String>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Scanner configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScanConfig {
    /// Globs excluded from scanning, in addition to gitignore rules
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Maximum number of concurrent file reads
    pub jobs: Option<usize>,

    /// Per-file read budget in seconds
    pub timeout_secs: Option<u64>,
}
