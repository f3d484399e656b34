//! Help-tag well-formedness rule
//!
//! Help documents declare tags as `*tag-name*` and reference them as
//! `|tag-name|`. Tag declarations must be closed and unique; every link
//! must resolve to a tag declared somewhere in the document set.

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

use crate::cancel::CancelToken;
use crate::rules::constants::{RULE_HELP_TAG_FORMAT, RULE_HELP_UNRESOLVED_LINK};
use crate::rules::engine::Rule;
use crate::rules::results::{Finding, Severity};
use crate::scanner::{FileSet, Role};

lazy_static! {
    /// A well-formed tag declaration: `*tag-name*`
    static ref TAG_DECLARATION: Regex = Regex::new(r"\*([^*\s|]+)\*").unwrap();

    /// A tag declaration missing its closing delimiter at end of line
    static ref UNCLOSED_TAG: Regex = Regex::new(r"\*([^*\s|]+)$").unwrap();

    /// A cross-reference link: `|tag-name|`
    static ref TAG_LINK: Regex = Regex::new(r"\|([^|\s]+)\|").unwrap();
}

pub struct HelpTagWellFormedness;

#[async_trait::async_trait]
impl Rule for HelpTagWellFormedness {
    fn name(&self) -> &'static str {
        "helpdoc"
    }

    fn summary(&self) -> &'static str {
        "help tags must be well-formed and every |link| must resolve to a declared tag"
    }

    async fn evaluate(&self, files: &FileSet, cancel: &CancelToken) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();
        let mut declared: HashSet<String> = HashSet::new();

        // First pass: collect every declared tag across the whole document
        // set, flagging duplicates and unclosed declarations as we go.
        for record in files.with_role(Role::HelpDoc) {
            if cancel.is_cancelled() {
                return Ok(findings);
            }

            let Some(content) = record.content() else {
                continue;
            };

            for (idx, line) in content.lines().enumerate() {
                for cap in TAG_DECLARATION.captures_iter(line) {
                    let tag = cap[1].to_string();
                    if !declared.insert(tag.clone()) {
                        findings.push(
                            Finding::new(
                                RULE_HELP_TAG_FORMAT,
                                Severity::Warn,
                                format!("duplicate help tag *{tag}*"),
                            )
                            .with_path(record.path.as_str())
                            .with_line(idx + 1),
                        );
                    }
                }

                if let Some(cap) = UNCLOSED_TAG.captures(line) {
                    findings.push(
                        Finding::new(
                            RULE_HELP_TAG_FORMAT,
                            Severity::Warn,
                            format!("help tag *{} is not closed", &cap[1]),
                        )
                        .with_path(record.path.as_str())
                        .with_line(idx + 1),
                    );
                }
            }
        }

        // Second pass: every link must resolve somewhere in the set
        for record in files.with_role(Role::HelpDoc) {
            if cancel.is_cancelled() {
                return Ok(findings);
            }

            let Some(content) = record.content() else {
                continue;
            };

            for (idx, line) in content.lines().enumerate() {
                for cap in TAG_LINK.captures_iter(line) {
                    let target = &cap[1];
                    if !declared.contains(target) {
                        findings.push(
                            Finding::new(
                                RULE_HELP_UNRESOLVED_LINK,
                                Severity::Error,
                                format!("unresolved help link |{target}|"),
                            )
                            .with_path(record.path.as_str())
                            .with_line(idx + 1),
                        );
                    }
                }
            }
        }

        Ok(findings)
    }
}
