//! Fingerprint reporting.

use crate::scan::hasher::Digest;
use std::io::Write;
use std::path::Path;

/// Sink for fingerprint results, invoked once per hashed file in visitation
/// order.
pub trait Reporter {
    fn report(&mut self, digest: &Digest, path: &Path) -> std::io::Result<()>;
}

/// Writes one `<lowercase-hex-digest> <path>` line per result. The path is
/// emitted exactly as produced by the traversal, so relative roots yield
/// relative paths and absolute roots yield absolute paths.
pub struct LineReporter<W: Write> {
    out: W,
}

impl<W: Write> LineReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the reporter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for LineReporter<W> {
    fn report(&mut self, digest: &Digest, path: &Path) -> std::io::Result<()> {
        writeln!(self.out, "{} {}", hex::encode(digest), path.display())
    }
}
