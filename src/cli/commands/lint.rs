//! Lint command - scan a plugin tree and report findings
//!
//! This is the main command: scan the tree into a record set, evaluate the
//! rule registry over it, and render the report. Ctrl-C trips the shared
//! cancellation token; the report for a cancelled run is marked partial but
//! still counts the findings gathered so far against the fail threshold.

use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use tracing::debug;

use super::{FailOn, LintArgs, OutputFormat};
use crate::cancel::CancelToken;
use crate::cli::exit_codes;
use crate::cli::output::{JsonOutput, ReportRenderer, TerminalOutput};
use crate::config::Config;
use crate::error::{PluglintError, ReportError};
use crate::rules::constants::filter_valid_rules;
use crate::rules::engine::RulesEngine;
use crate::rules::results::{Report, Severity};
use crate::scanner::{ScanOptions, Scanner};

const DEFAULT_JOBS: usize = 8;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Execute the lint command
///
/// # Returns
///
/// An exit code: 0 when no finding meets the fail threshold, 1 otherwise.
///
/// # Errors
///
/// Returns an error when the root cannot be scanned at all or the report
/// cannot be written.
pub async fn execute(args: LintArgs, config: Config) -> Result<i32, PluglintError> {
    let options = ScanOptions {
        jobs: args.jobs.or(config.scan.jobs).unwrap_or(DEFAULT_JOBS),
        timeout: Duration::from_secs(
            args.timeout
                .or(config.scan.timeout_secs)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        ),
        ignore: config.ignore_set()?,
    };

    let cancel = CancelToken::new();
    spawn_ctrl_c_handler(cancel.clone());

    // Scan the tree; a bad root is the only fatal outcome here
    let scanner = Scanner::with_options(args.root.clone(), options);
    let outcome = scanner.scan(&cancel).await?;

    // Evaluate the rules over the shared read-only record set
    let mut engine = RulesEngine::new(config.clone());
    if let Some(only) = &args.only {
        engine.set_only_rules(filter_valid_rules(only.clone()));
    }
    if let Some(skip) = &args.skip {
        engine.set_skip_rules(filter_valid_rules(skip.clone()));
    }

    let files = Arc::new(outcome.files);
    let rule_findings = engine.run(Arc::clone(&files), &cancel).await;

    // Assemble the report: scanner findings first, then registry order
    let mut report = Report::new(args.root.display().to_string());
    report.add_findings(outcome.findings);
    report.add_findings(rule_findings);
    if outcome.partial || cancel.is_cancelled() {
        report.mark_partial();
    }

    let renderer: Box<dyn ReportRenderer> = match args.format {
        OutputFormat::Text => Box::new(TerminalOutput::new()),
        OutputFormat::Json => Box::new(JsonOutput::new()),
    };
    let rendered = renderer.render_report(&report)?;

    write_report(&rendered, args.output.as_deref())?;

    let threshold = args
        .fail_on
        .map(FailOn::severity)
        .or_else(|| config.fail_on_threshold())
        .unwrap_or(Severity::Error);
    debug!(threshold = threshold.name(), "applying fail threshold");

    let exit_code = if report.exceeds(threshold) {
        exit_codes::VIOLATIONS
    } else {
        exit_codes::SUCCESS
    };
    Ok(exit_code)
}

fn spawn_ctrl_c_handler(cancel: CancelToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("{}", "Cancelling; report will be partial.".yellow());
            cancel.cancel();
        }
    });
}

fn write_report(rendered: &str, output: Option<&std::path::Path>) -> Result<(), PluglintError> {
    use std::io::Write;

    match output {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|e| {
                PluglintError::Report(ReportError::SinkWrite {
                    path: path.display().to_string(),
                    source: e,
                })
            })?;
            eprintln!(
                "{} Report written to: {}",
                "Success:".green().bold(),
                path.display().to_string().cyan()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|_| stdout.write_all(b"\n"))
                .map_err(|e| {
                    PluglintError::Report(ReportError::SinkWrite {
                        path: "stdout".to_string(),
                        source: e,
                    })
                })?;
        }
    }

    Ok(())
}
