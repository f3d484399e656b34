//! Scanner module - plugin tree scanning and role classification

mod classify;
mod filesystem;

use globset::GlobSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

pub use classify::{classify, Role};

use crate::cancel::CancelToken;
use crate::error::ScanError;
use crate::rules::results::Finding;

/// A single file gathered by a scan. Immutable once produced.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Relative path from the scan root, forward slashes
    pub path: String,
    /// Role assigned by path classification
    pub role: Role,
    /// Raw text content. `None` for unknown roles and files that could not
    /// be read; such records are excluded from rule evaluation.
    pub(crate) content: Option<String>,
}

impl FileRecord {
    /// Build a record directly. The scanner is the normal producer; this
    /// constructor exists for tests and benchmarks.
    pub fn new(path: impl Into<String>, role: Role, content: Option<String>) -> Self {
        Self {
            path: path.into(),
            role,
            content,
        }
    }

    /// The file content, if it was read successfully
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

/// The immutable record set a scan produces. Shared read-only with every
/// rule; never mutated after the scanner returns it.
#[derive(Debug)]
pub struct FileSet {
    root: PathBuf,
    records: Vec<FileRecord>,
}

impl FileSet {
    /// Build a record set directly. Used by tests and the scanner.
    pub fn from_records(root: impl Into<PathBuf>, records: Vec<FileRecord>) -> Self {
        Self {
            root: root.into(),
            records,
        }
    }

    /// The scanned root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All records, in path order
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Records with the given role that have readable content
    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &FileRecord> {
        self.records
            .iter()
            .filter(move |r| r.role == role && r.content.is_some())
    }

    /// Whether any record has the given role (readable or not)
    pub fn has_role(&self, role: Role) -> bool {
        self.records.iter().any(|r| r.role == role)
    }

    /// Look up a record by relative path
    pub fn get(&self, path: &str) -> Option<&FileRecord> {
        self.records.iter().find(|r| r.path == path)
    }
}

/// Tuning knobs for a scan, all caller-supplied
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Maximum number of concurrent file reads
    pub jobs: usize,
    /// Per-file read budget
    pub timeout: Duration,
    /// Paths excluded from the scan, in addition to gitignore rules
    pub ignore: GlobSet,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            jobs: 8,
            timeout: Duration::from_secs(10),
            ignore: GlobSet::empty(),
        }
    }
}

/// Everything a scan produced: the record set, the findings the scanner
/// itself raised (unreadable subtrees and files), and whether the scan was
/// cut short by cancellation.
#[derive(Debug)]
pub struct ScanOutcome {
    /// The immutable record set
    pub files: FileSet,
    /// Findings raised during scanning
    pub findings: Vec<Finding>,
    /// True when cancellation stopped the scan before it finished
    pub partial: bool,
}

/// Scans a plugin source tree into a [`FileSet`]
pub struct Scanner {
    root: PathBuf,
    options: ScanOptions,
}

impl Scanner {
    /// Create a scanner with default options
    pub fn new(root: PathBuf) -> Self {
        Self::with_options(root, ScanOptions::default())
    }

    /// Create a scanner with explicit worker-pool size and read timeout
    pub fn with_options(root: PathBuf, options: ScanOptions) -> Self {
        Self { root, options }
    }

    /// Walk the tree, classify every file, and read recognized files
    /// concurrently.
    ///
    /// Fails with [`ScanError`] only when the root itself is unusable;
    /// unreadable subtrees and files degrade to `warn` findings in the
    /// outcome.
    pub async fn scan(&self, cancel: &CancelToken) -> Result<ScanOutcome, ScanError> {
        self.check_root()?;

        let (candidates, mut findings) =
            filesystem::collect_entries(&self.root, &self.options.ignore);
        info!(files = candidates.len(), root = %self.root.display(), "tree walked");

        let (records, read_findings, partial) = filesystem::read_records(
            &self.root,
            candidates,
            self.options.jobs,
            self.options.timeout,
            cancel,
        )
        .await;
        findings.extend(read_findings);

        Ok(ScanOutcome {
            files: FileSet {
                root: self.root.clone(),
                records,
            },
            findings,
            partial,
        })
    }

    fn check_root(&self) -> Result<(), ScanError> {
        let display = self.root.display().to_string();

        let metadata = match std::fs::metadata(&self.root) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ScanError::RootMissing { path: display })
            }
            Err(e) => {
                return Err(ScanError::RootUnreadable {
                    path: display,
                    source: e,
                })
            }
        };

        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory { path: display });
        }

        // A directory we cannot list is as fatal as a missing one
        std::fs::read_dir(&self.root)
            .map(|_| ())
            .map_err(|e| ScanError::RootUnreadable {
                path: display,
                source: e,
            })
    }
}
