//! File system walking and bounded concurrent reads

use globset::GlobSet;
use ignore::WalkBuilder;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::debug;

use super::classify::{classify, Role};
use super::FileRecord;
use crate::cancel::CancelToken;
use crate::rules::constants::{RULE_SCAN_READ, RULE_SCAN_SUBTREE};
use crate::rules::results::{Finding, Severity};

/// A file discovered by the walk, before its content is read
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    /// Relative path from the scan root, forward slashes
    pub rel: String,
    /// Role assigned by path classification
    pub role: Role,
}

/// Walk the tree and classify every file by path shape.
///
/// Walker errors (unreadable subtrees, broken symlinks) degrade to per-entry
/// `warn` findings; the walk itself keeps going. Candidates come back sorted
/// by path so the record set is reproducible across runs.
pub(crate) fn collect_entries(root: &Path, ignore: &GlobSet) -> (Vec<Candidate>, Vec<Finding>) {
    let mut candidates = Vec::new();
    let mut findings = Vec::new();

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .ignore(true)
        .parents(true)
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                findings.push(Finding::new(
                    RULE_SCAN_SUBTREE,
                    Severity::Warn,
                    format!("subtree could not be scanned: {e}"),
                ));
                continue;
            }
        };

        let path = entry.path();

        if path == root {
            continue;
        }

        if path.components().any(|c| c.as_os_str() == ".git") {
            continue;
        }

        // Directories carry no content; only files become records
        if entry.file_type().map_or(true, |t| !t.is_file()) {
            continue;
        }

        let rel = match path.strip_prefix(root).ok().and_then(|p| p.to_str()) {
            Some(s) if !s.is_empty() => s.replace('\\', "/"),
            _ => continue,
        };

        if ignore.is_match(&rel) {
            debug!(path = %rel, "ignored by configuration");
            continue;
        }

        let role = classify(&rel);
        debug!(path = %rel, role = %role, "classified");
        candidates.push(Candidate { rel, role });
    }

    candidates.sort_by(|a, b| a.rel.cmp(&b.rel));
    (candidates, findings)
}

enum ReadOutcome {
    Content(String),
    /// Unknown role: retained in the record set, content never read
    Skipped,
    /// Cancellation tripped before the read started
    Cancelled,
    Failed(String),
}

/// Read candidate file contents concurrently.
///
/// Reads are bounded by a semaphore of `jobs` permits so a large tree cannot
/// exhaust file descriptors, and each read is subject to the caller-supplied
/// `timeout`. A file that cannot be read in time becomes a `warn` finding,
/// never a failure of the whole scan. Returns the records in candidate
/// order, the read findings, and whether the scan was cut short.
pub(crate) async fn read_records(
    root: &Path,
    candidates: Vec<Candidate>,
    jobs: usize,
    timeout: Duration,
    cancel: &CancelToken,
) -> (Vec<FileRecord>, Vec<Finding>, bool) {
    let semaphore = Arc::new(Semaphore::new(jobs.max(1)));
    let mut join_set = JoinSet::new();

    for (idx, candidate) in candidates.iter().enumerate() {
        let semaphore = Arc::clone(&semaphore);
        let cancel = cancel.clone();
        let abs = root.join(&candidate.rel);
        let role = candidate.role;

        join_set.spawn(async move {
            if !role.is_recognized() {
                return (idx, ReadOutcome::Skipped);
            }

            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => return (idx, ReadOutcome::Cancelled),
            };

            if cancel.is_cancelled() {
                return (idx, ReadOutcome::Cancelled);
            }

            match tokio::time::timeout(timeout, tokio::fs::read_to_string(&abs)).await {
                Ok(Ok(content)) => (idx, ReadOutcome::Content(content)),
                Ok(Err(e)) => (idx, ReadOutcome::Failed(format!("could not be read: {e}"))),
                Err(_) => (
                    idx,
                    ReadOutcome::Failed(format!(
                        "unreadable within {}ms timeout",
                        timeout.as_millis()
                    )),
                ),
            }
        });
    }

    let mut outcomes: Vec<Option<ReadOutcome>> = Vec::new();
    outcomes.resize_with(candidates.len(), || None);

    while let Some(joined) = join_set.join_next().await {
        if let Ok((idx, outcome)) = joined {
            outcomes[idx] = Some(outcome);
        }
    }

    let mut records = Vec::with_capacity(candidates.len());
    let mut findings = Vec::new();

    for (candidate, outcome) in candidates.into_iter().zip(outcomes) {
        let content = match outcome {
            Some(ReadOutcome::Content(content)) => Some(content),
            Some(ReadOutcome::Failed(reason)) => {
                findings.push(
                    Finding::new(
                        RULE_SCAN_READ,
                        Severity::Warn,
                        format!("file {reason}"),
                    )
                    .with_path(candidate.rel.as_str()),
                );
                None
            }
            Some(ReadOutcome::Skipped) | Some(ReadOutcome::Cancelled) | None => None,
        };

        records.push(FileRecord {
            path: candidate.rel,
            role: candidate.role,
            content,
        });
    }

    (records, findings, cancel.is_cancelled())
}
