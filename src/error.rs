//! Error types for pluglint
//!
//! This module defines custom error types using `thiserror`. Only two error
//! classes abort a run: a [`ScanError`] (the root path is unusable, nothing
//! was linted) and a [`ReportError`] (the report could not be written).
//! Everything else becomes a finding in the report.

use thiserror::Error;

use crate::cli::exit_codes;

/// Main error type for pluglint
#[derive(Error, Debug)]
pub enum PluglintError {
    /// Scan-related errors
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Report rendering/writing errors
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

impl PluglintError {
    /// The process exit code this error maps to.
    ///
    /// A `ScanError` means nothing was linted at all and gets its own code so
    /// CI can tell "bad invocation" apart from "findings over threshold".
    pub fn exit_code(&self) -> i32 {
        match self {
            PluglintError::Scan(_) => exit_codes::SCAN_ERROR,
            PluglintError::Config(_) | PluglintError::Report(_) => exit_codes::ERROR,
        }
    }
}

/// Errors that abort a scan before any rule runs
#[derive(Error, Debug)]
pub enum ScanError {
    /// The root path does not exist
    #[error("root path '{path}' does not exist")]
    RootMissing {
        /// The path that was given on the command line
        path: String,
    },

    /// The root path exists but is not a directory
    #[error("root path '{path}' is not a directory")]
    NotADirectory {
        /// The path that was given on the command line
        path: String,
    },

    /// The root directory could not be opened
    #[error("failed to read root directory '{path}': {source}")]
    RootUnreadable {
        /// The path that was given on the command line
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

/// Errors while loading or writing configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("failed to read config file '{path}': {source}")]
    FileRead {
        /// Path to the configuration file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// An ignore glob in the configuration is invalid
    #[error("invalid ignore glob '{pattern}': {source}")]
    InvalidGlob {
        /// The offending glob pattern
        pattern: String,
        /// The underlying globset error
        source: globset::Error,
    },

    /// Refusing to overwrite an existing configuration file
    #[error("configuration file '{path}' already exists (use --force to overwrite)")]
    AlreadyExists {
        /// Path to the existing configuration file
        path: String,
    },

    /// Failed to write the configuration file
    #[error("failed to write config file '{path}': {source}")]
    FileWrite {
        /// Path to the configuration file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

/// Errors while rendering or writing the report
#[derive(Error, Debug)]
pub enum ReportError {
    /// The output sink could not be written
    #[error("failed to write report to '{path}': {source}")]
    SinkWrite {
        /// Path of the output sink
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The report could not be serialized to JSON
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

// Allow `?` on serde/toml errors in functions returning PluglintError
impl From<serde_json::Error> for PluglintError {
    fn from(err: serde_json::Error) -> Self {
        PluglintError::Report(ReportError::Serialize(err))
    }
}

impl From<toml::de::Error> for PluglintError {
    fn from(err: toml::de::Error) -> Self {
        PluglintError::Config(ConfigError::Parse(err))
    }
}

impl From<toml::ser::Error> for PluglintError {
    fn from(err: toml::ser::Error) -> Self {
        PluglintError::Config(ConfigError::Serialize(err))
    }
}
