//! # Lint Result Structures
//!
//! This module defines the data structures for representing lint findings
//! and the report they are collected into.
//!
//! ## Overview
//!
//! - [`Severity`] - Finding severity levels (Error, Warn, Ok)
//! - [`Finding`] - Individual finding with optional file location
//! - [`Report`] - Ordered collection of findings from one scan
//!
//! ## Examples
//!
//! ### Creating Findings
//!
//! ```rust
//! use pluglint::rules::{Finding, Severity};
//!
//! let finding = Finding::new("LAZY001", Severity::Warn, "module required at load time")
//!     .with_path("plugin/demo.lua")
//!     .with_line(3);
//! ```
//!
//! ### Working with a Report
//!
//! ```rust
//! use pluglint::rules::{Finding, Report, Severity};
//!
//! let mut report = Report::new("my-plugin");
//!
//! report.add_finding(Finding::new("HEALTH001", Severity::Warn, "no health-check module"));
//!
//! assert_eq!(report.count_by_severity(Severity::Warn), 1);
//! assert!(!report.exceeds(Severity::Error));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity levels for lint findings.
///
/// Variants are ordered so that thresholds compare naturally:
/// `Ok < Warn < Error`. A `--fail-on` threshold of `warn` is exceeded by
/// both warnings and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational; never fails a run.
    Ok,
    /// A convention violation worth fixing. Fails only with `--fail-on warn`.
    Warn,
    /// A hard violation (e.g. an unresolved help link). Fails the run.
    Error,
}

impl Severity {
    /// Parse a severity from its common spellings
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "error" | "err" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "ok" | "info" | "note" => Some(Self::Ok),
            _ => None,
        }
    }

    /// Stable lowercase name, as used in reports
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Ok => "ok",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

/// A single lint finding.
///
/// Findings are created by rules (and by the scanner, for unreadable
/// files), never mutated, and collected into a [`Report`]. Project-level
/// findings carry no path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Finding code (e.g. "LAZY001", "HELP002")
    pub rule: String,

    /// Severity of the finding
    pub severity: Severity,

    /// Relative path of the file the finding is about, if any
    pub path: Option<String>,

    /// 1-based line number, when known
    pub line: Option<usize>,

    /// Short human-readable message
    pub message: String,
}

impl Finding {
    /// Create a new finding with no location
    pub fn new(rule: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            severity,
            path: None,
            line: None,
            message: message.into(),
        }
    }

    /// Set the file path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the line number
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// `path:line` rendering, or `(project)` for project-level findings
    pub fn location(&self) -> String {
        match (&self.path, self.line) {
            (Some(path), Some(line)) => format!("{path}:{line}"),
            (Some(path), None) => path.clone(),
            (None, _) => "(project)".to_string(),
        }
    }
}

/// The sole output artifact of a scan: an ordered sequence of findings plus
/// scan metadata. Created once per invocation; no state survives across
/// invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Tool version that produced the report
    pub version: String,

    /// Root directory that was scanned
    pub root: String,

    /// When the report was produced
    pub generated_at: DateTime<Utc>,

    /// True when the scan was cancelled before completing. A partial report
    /// must not be treated as a clean pass.
    pub partial: bool,

    /// All findings, in scanner-then-registry order
    findings: Vec<Finding>,
}

impl Report {
    /// Create an empty report for the given scan root
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            root: root.into(),
            generated_at: Utc::now(),
            partial: false,
            findings: Vec::new(),
        }
    }

    /// Flag the report as the result of a cancelled scan
    pub fn mark_partial(&mut self) {
        self.partial = true;
    }

    /// Add a finding
    pub fn add_finding(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Add multiple findings
    pub fn add_findings(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }

    /// All findings, in the order they were collected
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Findings with the given severity
    pub fn findings_by_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }

    /// Count findings with the given severity
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    /// Whether any finding is an error
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    /// Whether any finding is a warning
    pub fn has_warnings(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Warn)
    }

    /// Whether any finding meets or exceeds the given threshold.
    ///
    /// Partiality never downgrades findings: a cancelled report with errors
    /// still exceeds an `error` threshold.
    pub fn exceeds(&self, threshold: Severity) -> bool {
        self.findings.iter().any(|f| f.severity >= threshold)
    }

    /// Total number of findings
    pub fn total_count(&self) -> usize {
        self.findings.len()
    }

    /// Whether the report has no findings at all
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}
