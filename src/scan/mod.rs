//! Filesystem fingerprint scan.
//!
//! Composes the pruning policy, the depth-first walker, the streaming hasher,
//! and the line reporter into a single pass over a root directory. All scan
//! state is carried in an immutable [`ScanOptions`] value constructed once
//! before the walk.

pub mod hasher;
pub mod prune;
pub mod report;
pub mod walker;

pub use hasher::{Digest, DIGEST_LEN};
pub use prune::PruneSet;
pub use report::{LineReporter, Reporter};
pub use walker::{Visitor, Walker, WalkerConfig};

use crate::error::ScanError;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, instrument};

/// Options for one scan, fixed for the duration of the walk.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directory basenames whose subtrees are skipped entirely.
    pub prune: PruneSet,
    /// File name prefixes excluded from hashing. Evaluated per file before
    /// the file is opened; never prunes directories.
    pub skip_prefixes: Vec<String>,
    /// Whether to follow symbolic links (default: false for determinism).
    pub follow_symlinks: bool,
    /// Maximum depth to traverse (None = unlimited).
    pub max_depth: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            prune: PruneSet::default(),
            skip_prefixes: Vec::new(),
            follow_symlinks: false,
            max_depth: None,
        }
    }
}

/// Counters reported after a completed scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    /// Regular files hashed and reported.
    pub files_hashed: u64,
    /// Entries skipped after a read or listing error.
    pub entries_skipped: u64,
}

/// One-pass fingerprint scanner over a root directory.
pub struct Scanner {
    root: PathBuf,
    options: ScanOptions,
}

impl Scanner {
    /// Create a scanner with default options.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            options: ScanOptions::default(),
        }
    }

    /// Create a scanner with explicit options.
    pub fn with_options(root: PathBuf, options: ScanOptions) -> Self {
        Self { root, options }
    }

    /// Walk the root and emit one fingerprint line per readable regular file.
    ///
    /// Returns the scan counters on completion. Fails only when the root
    /// itself cannot be accessed.
    #[instrument(skip(self, reporter), fields(root = %self.root.display()))]
    pub fn run(&self, reporter: &mut dyn Reporter) -> Result<ScanSummary, ScanError> {
        let start = Instant::now();
        info!(prune_count = self.options.prune.len(), "Starting scan");

        let walker_config = WalkerConfig {
            follow_symlinks: self.options.follow_symlinks,
            max_depth: self.options.max_depth,
        };
        let walker = Walker::with_config(self.root.clone(), walker_config);

        let mut visitor = FingerprintVisitor {
            options: &self.options,
            reporter,
            files_hashed: 0,
        };
        let stats = walker.walk(&mut visitor)?;

        let summary = ScanSummary {
            files_hashed: visitor.files_hashed,
            entries_skipped: stats.skipped,
        };
        info!(
            files_hashed = summary.files_hashed,
            entries_skipped = summary.entries_skipped,
            duration_ms = start.elapsed().as_millis() as u64,
            "Scan completed"
        );
        Ok(summary)
    }
}

/// Visitor that hashes each file and hands the result to the reporter.
struct FingerprintVisitor<'a> {
    options: &'a ScanOptions,
    reporter: &'a mut dyn Reporter,
    files_hashed: u64,
}

impl Visitor for FingerprintVisitor<'_> {
    fn should_prune(&self, dir_name: &str) -> bool {
        self.options.prune.should_prune(dir_name)
    }

    fn should_skip(&self, file_name: &str) -> bool {
        self.options
            .skip_prefixes
            .iter()
            .any(|prefix| file_name.starts_with(prefix.as_str()))
    }

    fn on_file(&mut self, path: &Path, reader: &mut dyn Read) -> std::io::Result<()> {
        let digest = hasher::hash_reader(reader)?;
        self.reporter.report(&digest, path)?;
        self.files_hashed += 1;
        Ok(())
    }
}
