//! JSON output formatting
//!
//! The JSON shape is stable so other tooling can consume it: report
//! metadata, per-severity summary counts, and the findings array with
//! `{rule, severity, path, line, message}` objects.

use serde::Serialize;

use super::ReportRenderer;
use crate::error::PluglintError;
use crate::rules::results::{Finding, Report, Severity};

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    version: &'a str,
    root: &'a str,
    generated_at: &'a chrono::DateTime<chrono::Utc>,
    partial: bool,
    summary: SummaryOutput,
    findings: &'a [Finding],
}

#[derive(Serialize)]
struct SummaryOutput {
    error_count: usize,
    warn_count: usize,
    ok_count: usize,
}

impl ReportRenderer for JsonOutput {
    fn render_report(&self, report: &Report) -> Result<String, PluglintError> {
        let output = ReportOutput {
            version: &report.version,
            root: &report.root,
            generated_at: &report.generated_at,
            partial: report.partial,
            summary: SummaryOutput {
                error_count: report.count_by_severity(Severity::Error),
                warn_count: report.count_by_severity(Severity::Warn),
                ok_count: report.count_by_severity(Severity::Ok),
            },
            findings: report.findings(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}
