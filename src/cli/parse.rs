//! CLI parse: clap types for hashwalk. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hashwalk CLI - deterministic content fingerprints for directory trees
#[derive(Parser)]
#[command(name = "hashwalk")]
#[command(about = "Deterministic content fingerprinting for directory trees")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides hashwalk.toml discovery)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fingerprint every regular file under a root directory
    Scan {
        /// Root directory to scan
        root: PathBuf,

        /// Additional directory basename to prune (repeatable)
        #[arg(long = "prune", value_name = "NAME")]
        prune: Vec<String>,

        /// Start from an empty prune set instead of the built-ins
        #[arg(long)]
        no_default_prunes: bool,

        /// Skip files whose name starts with this prefix (repeatable)
        #[arg(long = "skip-prefix", value_name = "PREFIX")]
        skip_prefix: Vec<String>,

        /// Follow symbolic links during traversal
        #[arg(long)]
        follow_symlinks: bool,

        /// Maximum traversal depth
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Print the effective prune set, one name per line
    Prunes,
}
