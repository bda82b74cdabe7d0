//! CLI route: run context and command dispatch.

use crate::cli::parse::Commands;
use crate::config::{ConfigLoader, HashwalkConfig};
use crate::error::{CliError, ScanError};
use crate::scan::{LineReporter, Scanner};
use std::io::{self, Write};
use std::path::PathBuf;

/// Runtime context for CLI execution: the merged configuration.
/// Built once from the optional config path using ConfigLoader only.
pub struct RunContext {
    config: HashwalkConfig,
}

impl RunContext {
    /// Create a run context from an optional explicit config path.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, CliError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self { config })
    }

    /// The merged configuration this context runs with.
    pub fn config(&self) -> &HashwalkConfig {
        &self.config
    }

    /// Execute a CLI command. Fingerprint records stream to stdout as they
    /// are produced; diagnostics go to the log stream.
    pub fn execute(&self, command: &Commands) -> Result<(), CliError> {
        match command {
            Commands::Scan {
                root,
                prune,
                no_default_prunes,
                skip_prefix,
                follow_symlinks,
                max_depth,
            } => {
                let mut settings = self.config.scan.clone();
                if *no_default_prunes {
                    settings.include_default_prunes = false;
                }
                settings.prune.extend(prune.iter().cloned());
                settings.skip_prefixes.extend(skip_prefix.iter().cloned());
                if *follow_symlinks {
                    settings.follow_symlinks = true;
                }
                if max_depth.is_some() {
                    settings.max_depth = *max_depth;
                }

                let scanner = Scanner::with_options(root.clone(), settings.to_options());
                let stdout = io::stdout();
                let mut reporter = LineReporter::new(stdout.lock());
                scanner.run(&mut reporter)?;
                Ok(())
            }
            Commands::Prunes => {
                let options = self.config.scan.to_options();
                let stdout = io::stdout();
                let mut out = stdout.lock();
                for name in options.prune.iter() {
                    writeln!(out, "{}", name).map_err(ScanError::Io)?;
                }
                Ok(())
            }
        }
    }
}
