//! Depth-first filesystem walker with subtree pruning.
//!
//! Entries are visited pre-order with siblings in lexical order, so repeated
//! walks of an unmodified tree visit the same entries in the same sequence.

use crate::error::ScanError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Per-entry strategy consulted by the walker.
///
/// `should_prune` is asked once per directory with its base name; a `true`
/// answer skips the whole subtree. `should_skip` is asked once per regular
/// file with its file name, before the file is opened. `on_file` receives an
/// open reader for every remaining regular file; the walker closes the
/// handle when the call returns, on success and on error alike.
pub trait Visitor {
    fn should_prune(&self, dir_name: &str) -> bool;

    fn should_skip(&self, file_name: &str) -> bool;

    fn on_file(&mut self, path: &Path, reader: &mut dyn Read) -> std::io::Result<()>;
}

/// Filesystem walker configuration.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false for determinism).
    pub follow_symlinks: bool,
    /// Maximum depth to traverse (None = unlimited).
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            max_depth: None,
        }
    }
}

/// Counters for entries the walk could not visit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkStats {
    /// Entries skipped after a listing or read error.
    pub skipped: u64,
}

/// Streaming filesystem walker.
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a walker with default configuration.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration.
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the root, dispatching each entry to the visitor.
    ///
    /// Per-entry failures are logged and counted, never fatal: an unreadable
    /// file or directory must not prevent the rest of the tree from being
    /// visited. Only a root that cannot be accessed at all aborts the walk.
    pub fn walk(&self, visitor: &mut dyn Visitor) -> Result<WalkStats, ScanError> {
        let mut stats = WalkStats::default();

        let mut it = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = it.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    if err.depth() == 0 {
                        return Err(ScanError::RootAccess {
                            path: self.root.clone(),
                            message: err.to_string(),
                        });
                    }
                    warn!(error = %err, "Skipping unreadable entry");
                    stats.skipped += 1;
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                let name = entry.file_name().to_string_lossy();
                if visitor.should_prune(&name) {
                    it.skip_current_dir();
                }
                // Directories themselves produce no result.
                continue;
            }
            if !file_type.is_file() {
                // Symlinks and special files are not hashed.
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if visitor.should_skip(&name) {
                continue;
            }

            let path = entry.path();
            let file = match File::open(path) {
                Ok(file) => file,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Skipping unreadable file");
                    stats.skipped += 1;
                    continue;
                }
            };
            let mut reader = BufReader::new(file);
            if let Err(err) = visitor.on_file(path, &mut reader) {
                warn!(path = %path.display(), error = %err, "Skipping file after read error");
                stats.skipped += 1;
            }
        }

        Ok(stats)
    }
}
