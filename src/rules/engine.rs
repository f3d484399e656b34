//! Rules evaluation engine

use std::sync::Arc;

use anyhow::Result;
use tokio::task::JoinSet;
use tracing::{debug, info};

use super::checks::{
    DirectLeaderKeymap, EntryPointMinimality, HelpTagWellFormedness, MissingHealthCheck,
};
use super::results::Finding;
use crate::cancel::CancelToken;
use crate::config::Config;
use crate::scanner::FileSet;

/// Trait for convention rules.
///
/// A rule is a pure function of the record set: it never mutates a record,
/// never sees another rule's output, and yields the same findings for the
/// same input. Rules check the cancellation token at safe points and return
/// whatever they have found so far when it trips.
#[async_trait::async_trait]
pub trait Rule: Send + Sync {
    /// Short rule name, used for --only/--skip and configuration
    fn name(&self) -> &'static str;

    /// One-line description for the `rules` listing
    fn summary(&self) -> &'static str;

    /// Evaluate the rule over the record set
    async fn evaluate(&self, files: &FileSet, cancel: &CancelToken) -> Result<Vec<Finding>>;
}

/// The fixed rule registry. Findings are reported in this order regardless
/// of which rule finishes first.
pub fn registry() -> Vec<Arc<dyn Rule>> {
    vec![
        Arc::new(EntryPointMinimality),
        Arc::new(DirectLeaderKeymap),
        Arc::new(MissingHealthCheck),
        Arc::new(HelpTagWellFormedness),
    ]
}

/// Main rules evaluation engine
pub struct RulesEngine {
    config: Config,
    only_rules: Option<Vec<String>>,
    skip_rules: Option<Vec<String>>,
}

impl RulesEngine {
    /// Create a new rules engine with the given configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            only_rules: None,
            skip_rules: None,
        }
    }

    /// Set rules to exclusively run
    pub fn set_only_rules(&mut self, rules: Vec<String>) {
        self.only_rules = Some(rules);
    }

    /// Set rules to skip
    pub fn set_skip_rules(&mut self, rules: Vec<String>) {
        self.skip_rules = Some(rules);
    }

    /// Check if a rule should be run
    fn should_run_rule(&self, rule: &str) -> bool {
        if let Some(only) = &self.only_rules {
            return only.iter().any(|r| r == rule);
        }

        if let Some(skip) = &self.skip_rules {
            return !skip.iter().any(|r| r == rule);
        }

        true
    }

    /// Run all enabled rules over the record set and return their findings.
    ///
    /// Rules run concurrently; the record set is shared read-only. Findings
    /// come back in registry order so two runs over the same records yield
    /// identical output. A rule that fails is logged and contributes no
    /// findings; it never aborts the engine.
    pub async fn run(&self, files: Arc<FileSet>, cancel: &CancelToken) -> Vec<Finding> {
        let mut join_set: JoinSet<(usize, &'static str, Vec<Finding>)> = JoinSet::new();

        for (idx, rule) in registry().into_iter().enumerate() {
            let rule_name = rule.name();

            if !self.should_run_rule(rule_name) {
                debug!(rule = rule_name, "skipping rule (filtered)");
                continue;
            }

            if !self.config.is_rule_enabled(rule_name) {
                debug!(rule = rule_name, "skipping rule (disabled in config)");
                continue;
            }

            if cancel.is_cancelled() {
                break;
            }

            let files = Arc::clone(&files);
            let cancel = cancel.clone();
            join_set.spawn(async move {
                debug!(rule = rule.name(), "running rule");
                let findings = match rule.evaluate(&files, &cancel).await {
                    Ok(findings) => findings,
                    Err(e) => {
                        tracing::warn!(rule = rule.name(), error = %e, "rule evaluation failed");
                        Vec::new()
                    }
                };
                (idx, rule.name(), findings)
            });
        }

        let mut buckets = Vec::new();
        while let Some(joined) = join_set.join_next().await {
            if let Ok(bucket) = joined {
                buckets.push(bucket);
            }
        }
        buckets.sort_by_key(|(idx, _, _)| *idx);

        let mut findings = Vec::new();
        for (_, rule_name, mut rule_findings) in buckets {
            if let Some(severity) = self.config.rule_severity_override(rule_name) {
                for finding in &mut rule_findings {
                    finding.severity = severity;
                }
            }
            findings.extend(rule_findings);
        }

        info!(findings = findings.len(), "rule evaluation complete");
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleConfig;
    use crate::rules::results::Severity;
    use crate::scanner::{FileRecord, Role};

    fn demo_files() -> Arc<FileSet> {
        Arc::new(FileSet::from_records(
            "/tmp/demo",
            vec![
                FileRecord {
                    path: "plugin/demo.lua".to_string(),
                    role: Role::EntryPoint,
                    content: Some("local demo = require('demo')\n".to_string()),
                },
                FileRecord {
                    path: "doc/demo.txt".to_string(),
                    role: Role::HelpDoc,
                    content: Some("*demo.txt*\nSee |demo-missing|.\n".to_string()),
                },
            ],
        ))
    }

    #[tokio::test]
    async fn test_engine_runs_all_rules() {
        let engine = RulesEngine::new(Config::default());
        let findings = engine.run(demo_files(), &CancelToken::new()).await;

        let rules: Vec<_> = findings.iter().map(|f| f.rule.as_str()).collect();
        assert!(rules.contains(&"LAZY001"));
        assert!(rules.contains(&"HEALTH001"));
        assert!(rules.contains(&"HELP002"));
    }

    #[tokio::test]
    async fn test_engine_is_deterministic() {
        let engine = RulesEngine::new(Config::default());
        let first = engine.run(demo_files(), &CancelToken::new()).await;
        let second = engine.run(demo_files(), &CancelToken::new()).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_engine_filters_with_only() {
        let mut engine = RulesEngine::new(Config::default());
        engine.set_only_rules(vec!["health".to_string()]);

        let findings = engine.run(demo_files(), &CancelToken::new()).await;
        assert!(findings.iter().all(|f| f.rule == "HEALTH001"));
        assert_eq!(findings.len(), 1);
    }

    #[tokio::test]
    async fn test_engine_filters_with_skip() {
        let mut engine = RulesEngine::new(Config::default());
        engine.set_skip_rules(vec!["helpdoc".to_string()]);

        let findings = engine.run(demo_files(), &CancelToken::new()).await;
        assert!(findings.iter().all(|f| f.rule != "HELP002"));
    }

    #[tokio::test]
    async fn test_engine_honors_config_disable() {
        let mut config = Config::default();
        config.rules.insert(
            "lazy".to_string(),
            RuleConfig {
                enabled: false,
                severity: None,
            },
        );

        let engine = RulesEngine::new(config);
        let findings = engine.run(demo_files(), &CancelToken::new()).await;
        assert!(findings.iter().all(|f| f.rule != "LAZY001"));
    }

    #[tokio::test]
    async fn test_engine_applies_severity_override() {
        let mut config = Config::default();
        config.rules.insert(
            "lazy".to_string(),
            RuleConfig {
                enabled: true,
                severity: Some("error".to_string()),
            },
        );

        let engine = RulesEngine::new(config);
        let findings = engine.run(demo_files(), &CancelToken::new()).await;

        let lazy = findings.iter().find(|f| f.rule == "LAZY001").unwrap();
        assert_eq!(lazy.severity, Severity::Error);
    }

    #[tokio::test]
    async fn test_cancelled_engine_returns_no_new_work() {
        let engine = RulesEngine::new(Config::default());
        let cancel = CancelToken::new();
        cancel.cancel();

        let findings = engine.run(demo_files(), &cancel).await;
        assert!(findings.is_empty());
    }

    #[test]
    fn test_should_run_rule_default() {
        let engine = RulesEngine::new(Config::default());
        assert!(engine.should_run_rule("lazy"));
        assert!(engine.should_run_rule("keymaps"));
        assert!(engine.should_run_rule("helpdoc"));
    }

    #[test]
    fn test_registry_order_is_stable() {
        let names: Vec<_> = registry().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["lazy", "keymaps", "health", "helpdoc"]);
    }
}
