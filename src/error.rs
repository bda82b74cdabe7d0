//! Error types for the hashwalk fingerprinting tool.

use std::path::PathBuf;
use thiserror::Error;

/// Scan-related errors.
///
/// Only a root that cannot be accessed at all is fatal; per-entry read
/// failures are logged and skipped inside the walk.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot access scan root {}: {message}", .path.display())]
    RootAccess { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced at the CLI boundary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("scan failed: {0}")]
    Scan(#[from] ScanError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
