//! CLI output: maps domain errors to the stable diagnostic surface.

use crate::error::CliError;

/// Render an error for the CLI. Keeps route handlers thin; extend with
/// stable categories if needed.
pub fn map_error(e: &CliError) -> String {
    e.to_string()
}
