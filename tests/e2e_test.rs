//! End-to-end tests driving the scanner and rules engine as a library

use std::fs;
use std::path::Path;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use pluglint::cancel::CancelToken;
use pluglint::config::Config;
use pluglint::rules::engine::RulesEngine;
use pluglint::rules::results::{Report, Severity};
use pluglint::rules::Finding;
use pluglint::scanner::{Role, Scanner};

fn write_plugin_with_warnings(root: &Path) {
    fs::create_dir_all(root.join("plugin")).unwrap();
    fs::create_dir_all(root.join("lua/demo")).unwrap();
    fs::create_dir_all(root.join("doc")).unwrap();

    // Eager require plus a literal leader mapping
    fs::write(
        root.join("plugin/demo.lua"),
        "local demo = require('demo')\nvim.keymap.set('n', '<leader>dr', demo.run)\n",
    )
    .unwrap();
    fs::write(root.join("lua/demo/init.lua"), "return {}\n").unwrap();
    fs::write(
        root.join("doc/demo.txt"),
        "*demo.txt*\nSee |demo-nowhere|.\n",
    )
    .unwrap();
}

async fn scan_and_run(root: &Path) -> (Report, bool) {
    let cancel = CancelToken::new();
    let scanner = Scanner::new(root.to_path_buf());
    let outcome = scanner.scan(&cancel).await.unwrap();

    let engine = RulesEngine::new(Config::default());
    let files = Arc::new(outcome.files);
    let findings = engine.run(files, &cancel).await;

    let mut report = Report::new(root.display().to_string());
    report.add_findings(outcome.findings);
    report.add_findings(findings);
    let partial = outcome.partial;
    if partial {
        report.mark_partial();
    }
    (report, partial)
}

#[tokio::test]
async fn test_full_pipeline_collects_expected_findings() {
    let temp_dir = TempDir::new().unwrap();
    write_plugin_with_warnings(temp_dir.path());

    let (report, partial) = scan_and_run(temp_dir.path()).await;

    assert!(!partial);
    let rules: Vec<&str> = report.findings().iter().map(|f| f.rule.as_str()).collect();
    assert_eq!(rules, vec!["LAZY001", "KEY001", "HEALTH001", "HELP002"]);

    assert!(report.exceeds(Severity::Error));
    assert_eq!(report.count_by_severity(Severity::Error), 1);
    assert_eq!(report.count_by_severity(Severity::Warn), 3);
}

#[tokio::test]
async fn test_pipeline_is_reproducible() {
    let temp_dir = TempDir::new().unwrap();
    write_plugin_with_warnings(temp_dir.path());

    let (first, _) = scan_and_run(temp_dir.path()).await;
    let (second, _) = scan_and_run(temp_dir.path()).await;

    assert_eq!(first.findings(), second.findings());
}

#[tokio::test]
async fn test_health_finding_is_project_level_and_unique() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir_all(root.join("lua/demo")).unwrap();
    for i in 0..20 {
        fs::write(root.join(format!("lua/demo/mod{i}.lua")), "return {}\n").unwrap();
    }

    let (report, _) = scan_and_run(root).await;

    let health: Vec<&Finding> = report
        .findings()
        .iter()
        .filter(|f| f.rule == "HEALTH001")
        .collect();
    assert_eq!(health.len(), 1);
    assert!(health[0].path.is_none());
}

#[tokio::test]
async fn test_health_module_silences_health_finding() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir_all(root.join("lua/demo")).unwrap();
    fs::write(root.join("lua/demo/health.lua"), "return {}\n").unwrap();

    let (report, _) = scan_and_run(root).await;
    assert!(report.findings().iter().all(|f| f.rule != "HEALTH001"));
}

#[tokio::test]
async fn test_unknown_files_are_retained_but_never_evaluated() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir_all(root.join("lua/demo")).unwrap();
    fs::write(root.join("lua/demo/health.lua"), "return {}\n").unwrap();
    // A stray script outside any recognized directory, full of violations
    fs::write(
        root.join("setup.lua"),
        "local demo = require('demo')\nvim.keymap.set('n', '<leader>x', demo.run)\n",
    )
    .unwrap();

    let cancel = CancelToken::new();
    let scanner = Scanner::new(root.to_path_buf());
    let outcome = scanner.scan(&cancel).await.unwrap();

    let stray = outcome.files.get("setup.lua").unwrap();
    assert_eq!(stray.role, Role::Unknown);
    assert!(stray.content().is_none());

    let engine = RulesEngine::new(Config::default());
    let findings = engine.run(Arc::new(outcome.files), &cancel).await;
    assert!(findings
        .iter()
        .all(|f| f.path.as_deref() != Some("setup.lua")));
}

#[tokio::test]
async fn test_cancelled_scan_produces_partial_report() {
    let temp_dir = TempDir::new().unwrap();
    write_plugin_with_warnings(temp_dir.path());

    let cancel = CancelToken::new();
    cancel.cancel();

    let scanner = Scanner::new(temp_dir.path().to_path_buf());
    let outcome = scanner.scan(&cancel).await.unwrap();
    assert!(outcome.partial);

    let mut report = Report::new(temp_dir.path().display().to_string());
    report.add_findings(outcome.findings);
    report.mark_partial();

    // Errors already collected before cancellation still count against the
    // threshold; partiality never turns failure into success
    report.add_finding(Finding::new(
        "HELP002",
        Severity::Error,
        "unresolved help link |demo-nowhere|",
    ));
    assert!(report.partial);
    assert!(report.exceeds(Severity::Error));
}

#[tokio::test]
async fn test_cross_document_links_resolve() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir_all(root.join("lua/demo")).unwrap();
    fs::create_dir_all(root.join("doc")).unwrap();
    fs::write(root.join("lua/demo/health.lua"), "return {}\n").unwrap();
    fs::write(root.join("doc/demo.txt"), "*demo.txt*\nSee |demo-extras|.\n").unwrap();
    fs::write(root.join("doc/extras.txt"), "*demo-extras*\nDetails.\n").unwrap();

    let (report, _) = scan_and_run(root).await;
    assert!(report.is_clean(), "findings: {:?}", report.findings());
}
