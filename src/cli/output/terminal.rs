//! Terminal output formatting with colors
//!
//! Colors follow the `colored` crate's defaults, including the `NO_COLOR`
//! environment variable for disabling them.

use colored::Colorize;

use super::ReportRenderer;
use crate::error::PluglintError;
use crate::rules::results::{Finding, Report, Severity};

pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    fn format_header(&self, report: &Report) -> String {
        let mut header = format!(
            r#"
{} v{}

{} {}
"#,
            "pluglint".cyan().bold(),
            report.version,
            "Root:".dimmed(),
            report.root.white().bold(),
        );

        if report.partial {
            header.push_str(&format!(
                "{} {}\n",
                "Partial:".dimmed(),
                "scan was cancelled before completing".yellow()
            ));
        }

        header
    }

    fn format_findings(&self, report: &Report) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  LINT RESULTS".bold()
        ));

        if report.is_clean() {
            output.push_str(&format!("  {}\n", "No findings.".green()));
            return output;
        }

        let errors: Vec<_> = report.findings_by_severity(Severity::Error).collect();
        if !errors.is_empty() {
            output.push_str(&format!("{} ({})\n", "❌ ERROR".red().bold(), errors.len()));
            for finding in errors {
                output.push_str(&self.format_finding(finding));
            }
            output.push('\n');
        }

        let warnings: Vec<_> = report.findings_by_severity(Severity::Warn).collect();
        if !warnings.is_empty() {
            output.push_str(&format!(
                "{} ({})\n",
                "⚠️  WARN".yellow().bold(),
                warnings.len()
            ));
            for finding in warnings {
                output.push_str(&self.format_finding(finding));
            }
            output.push('\n');
        }

        let notes: Vec<_> = report.findings_by_severity(Severity::Ok).collect();
        if !notes.is_empty() {
            output.push_str(&format!("{} ({})\n", "ℹ️  OK".blue().bold(), notes.len()));
            for finding in notes {
                output.push_str(&self.format_finding(finding));
            }
            output.push('\n');
        }

        output
    }

    fn format_finding(&self, finding: &Finding) -> String {
        format!(
            "  {} [{}] {}\n    {} {}\n",
            "•".dimmed(),
            finding.rule.cyan(),
            finding.message,
            "└─".dimmed(),
            finding.location().dimmed()
        )
    }

    fn format_summary(&self, report: &Report) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  SUMMARY".bold()
        ));

        let error_count = report.count_by_severity(Severity::Error);
        let warn_count = report.count_by_severity(Severity::Warn);
        let ok_count = report.count_by_severity(Severity::Ok);

        output.push_str(&format!(
            "Errors: {} │ Warnings: {} │ Notes: {}\n",
            error_count.to_string().red().bold(),
            warn_count.to_string().yellow().bold(),
            ok_count.to_string().blue().bold()
        ));

        if report.partial {
            output.push_str(&format!(
                "\n{} Scan was cancelled; findings above are incomplete.\n",
                "⚠️ ".yellow()
            ));
        }

        output
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TerminalOutput {
    fn render_report(&self, report: &Report) -> Result<String, PluglintError> {
        let mut output = String::new();

        output.push_str(&self.format_header(report));
        output.push_str(&self.format_findings(report));
        output.push_str(&self.format_summary(report));

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::results::Finding;

    fn create_test_report() -> Report {
        let mut report = Report::new("demo.nvim");
        report.add_finding(
            Finding::new("HELP002", Severity::Error, "unresolved help link |demo-x|")
                .with_path("doc/demo.txt")
                .with_line(12),
        );
        report.add_finding(
            Finding::new("LAZY001", Severity::Warn, "module required at load time")
                .with_path("plugin/demo.lua")
                .with_line(1),
        );
        report.add_finding(Finding::new(
            "HEALTH001",
            Severity::Warn,
            "no health-check module found",
        ));
        report
    }

    #[test]
    fn test_format_header_names_root() {
        let output = TerminalOutput::new();
        let header = output.format_header(&create_test_report());
        assert!(header.contains("demo.nvim"));
        assert!(header.contains("pluglint"));
    }

    #[test]
    fn test_format_header_flags_partial() {
        let output = TerminalOutput::new();
        let mut report = create_test_report();
        report.mark_partial();
        let header = output.format_header(&report);
        assert!(header.contains("cancelled"));
    }

    #[test]
    fn test_format_findings_groups_by_severity() {
        let output = TerminalOutput::new();
        let formatted = output.format_findings(&create_test_report());
        assert!(formatted.contains("HELP002"));
        assert!(formatted.contains("LAZY001"));
        assert!(formatted.contains("HEALTH001"));
        assert!(formatted.contains("ERROR"));
        assert!(formatted.contains("WARN"));
    }

    #[test]
    fn test_format_findings_empty() {
        let output = TerminalOutput::new();
        let formatted = output.format_findings(&Report::new("clean"));
        assert!(formatted.contains("No findings"));
    }

    #[test]
    fn test_format_finding_shows_location() {
        let output = TerminalOutput::new();
        let finding = Finding::new("KEY001", Severity::Warn, "literal <leader> mapping")
            .with_path("plugin/demo.lua")
            .with_line(7);
        let formatted = output.format_finding(&finding);
        assert!(formatted.contains("KEY001"));
        assert!(formatted.contains("plugin/demo.lua:7"));
    }

    #[test]
    fn test_format_finding_project_level() {
        let output = TerminalOutput::new();
        let finding = Finding::new("HEALTH001", Severity::Warn, "no health-check module found");
        let formatted = output.format_finding(&finding);
        assert!(formatted.contains("(project)"));
    }

    #[test]
    fn test_format_summary_counts() {
        let output = TerminalOutput::new();
        let formatted = output.format_summary(&create_test_report());
        assert!(formatted.contains("SUMMARY"));
        assert!(formatted.contains("Errors:"));
        assert!(formatted.contains("Warnings:"));
    }

    #[test]
    fn test_render_report() {
        let output = TerminalOutput::new();
        let rendered = output.render_report(&create_test_report()).unwrap();
        assert!(rendered.contains("demo.nvim"));
        assert!(rendered.contains("HELP002"));
        assert!(rendered.contains("SUMMARY"));
    }
}
