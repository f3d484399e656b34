//! Configuration loader

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, PluglintError};
use crate::rules::results::Severity;

use super::{RuleConfig, ScanConfig};

/// Name of the configuration file, looked up in the working directory
pub const CONFIG_FILENAME: &str = ".pluglint.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default severity threshold for failing the run (error or warn).
    /// The --fail-on flag takes precedence.
    #[serde(default)]
    pub fail_on: Option<String>,

    /// Rule overrides, keyed by rule name (lazy, keymaps, health, helpdoc)
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,

    /// Scanner configuration
    #[serde(default)]
    pub scan: ScanConfig,
}

impl Config {
    /// Load configuration from the working directory or return the default
    pub fn load_or_default() -> Result<Self, PluglintError> {
        let config_path = Path::new(CONFIG_FILENAME);

        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, PluglintError> {
        let content = fs::read_to_string(path).map_err(|e| {
            PluglintError::Config(ConfigError::FileRead {
                path: path.display().to_string(),
                source: e,
            })
        })?;

        toml::from_str(&content).map_err(Into::into)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, PluglintError> {
        toml::to_string_pretty(self).map_err(Into::into)
    }

    /// Check if a rule is enabled
    pub fn is_rule_enabled(&self, rule: &str) -> bool {
        self.rules.get(rule).map(|r| r.enabled).unwrap_or(true)
    }

    /// Get the severity override for a rule, if one is configured and valid
    pub fn rule_severity_override(&self, rule: &str) -> Option<Severity> {
        self.rules
            .get(rule)
            .and_then(|r| r.severity.as_deref())
            .and_then(Severity::from_string)
    }

    /// The configured default fail threshold, if any
    pub fn fail_on_threshold(&self) -> Option<Severity> {
        self.fail_on.as_deref().and_then(Severity::from_string)
    }

    /// Compile the configured ignore globs into a matcher
    pub fn ignore_set(&self) -> Result<GlobSet, PluglintError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.scan.ignore {
            let glob = Glob::new(pattern).map_err(|e| {
                PluglintError::Config(ConfigError::InvalidGlob {
                    pattern: pattern.clone(),
                    source: e,
                })
            })?;
            builder.add(glob);
        }
        builder.build().map_err(|e| {
            PluglintError::Config(ConfigError::InvalidGlob {
                pattern: self.scan.ignore.join(", "),
                source: e,
            })
        })
    }
}
