//! Configuration system.
//!
//! Merges an optional `hashwalk.toml` (or an explicit `--config` file) with
//! `HASHWALK_*` environment overrides into one immutable value. The effective
//! scan options are derived from it once, before the walk starts; nothing is
//! read or mutated mid-traversal.

use crate::error::CliError;
use crate::logging::LoggingConfig;
use crate::scan::{PruneSet, ScanOptions};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file discovered in the current directory when no explicit path is
/// given.
pub const WORKSPACE_CONFIG_FILE: &str = "hashwalk.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HashwalkConfig {
    /// Scan settings
    #[serde(default)]
    pub scan: ScanSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Scan settings as they appear in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSettings {
    /// Extra directory basenames to prune, appended to the built-in set.
    #[serde(default)]
    pub prune: Vec<String>,

    /// When false, start from an empty prune set instead of the built-ins.
    #[serde(default = "default_true")]
    pub include_default_prunes: bool,

    /// File name prefixes to skip before hashing.
    #[serde(default)]
    pub skip_prefixes: Vec<String>,

    /// Follow symbolic links during traversal.
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Maximum traversal depth.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

fn default_true() -> bool {
    true
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            prune: Vec::new(),
            include_default_prunes: true,
            skip_prefixes: Vec::new(),
            follow_symlinks: false,
            max_depth: None,
        }
    }
}

impl ScanSettings {
    /// Resolve the settings into the immutable options a scan runs with.
    pub fn to_options(&self) -> ScanOptions {
        let mut prune = if self.include_default_prunes {
            PruneSet::with_defaults()
        } else {
            PruneSet::empty()
        };
        prune.extend(self.prune.iter().cloned());

        ScanOptions {
            prune,
            skip_prefixes: self.skip_prefixes.clone(),
            follow_symlinks: self.follow_symlinks,
            max_depth: self.max_depth,
        }
    }
}

/// Loads configuration from file sources and environment overrides.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration, discovering `hashwalk.toml` in the current
    /// directory when present.
    pub fn load() -> Result<HashwalkConfig, CliError> {
        Self::build(None)
    }

    /// Load configuration from an explicit file. The file must exist.
    pub fn load_from_file(path: &Path) -> Result<HashwalkConfig, CliError> {
        Self::build(Some(path))
    }

    fn build(explicit: Option<&Path>) -> Result<HashwalkConfig, CliError> {
        let mut builder = Config::builder();

        match explicit {
            Some(path) => {
                builder = builder.add_source(File::from(path.to_path_buf()).required(true));
            }
            None => {
                let workspace = Path::new(WORKSPACE_CONFIG_FILE);
                if workspace.exists() {
                    builder = builder.add_source(File::from(workspace.to_path_buf()).required(false));
                }
            }
        }

        builder = builder.add_source(Environment::with_prefix("HASHWALK").separator("__"));

        let merged = builder.build()?;
        Ok(merged.try_deserialize()?)
    }
}
