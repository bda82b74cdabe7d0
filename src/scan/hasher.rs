//! Streaming content hashing using BLAKE3.
//!
//! Digests are 128 bits, taken from the BLAKE3 extendable output. That is
//! enough for content identification in an inventory listing; this is not an
//! integrity-verification primitive.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 16;

/// A 128-bit content digest.
pub type Digest = [u8; DIGEST_LEN];

/// Read buffer size. Bounds resident memory regardless of file size.
const CHUNK_SIZE: usize = 64 * 1024;

/// Consume a reader to completion in bounded chunks and return its digest.
///
/// Identical byte content always yields an identical digest, independent of
/// path, chunking, or invocation time.
pub fn hash_reader<R: Read + ?Sized>(reader: &mut R) -> std::io::Result<Digest> {
    let mut hasher = blake3::Hasher::new();
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    let mut digest = [0u8; DIGEST_LEN];
    hasher.finalize_xof().fill(&mut digest);
    Ok(digest)
}

/// Open and hash the file at `path`. The handle is closed before returning,
/// on success and on error alike.
pub fn hash_file(path: &Path) -> std::io::Result<Digest> {
    let file = File::open(path)?;
    let mut reader = BufReader::with_capacity(CHUNK_SIZE, file);
    hash_reader(&mut reader)
}

/// Hash an in-memory byte slice.
pub fn hash_bytes(data: &[u8]) -> Digest {
    let mut hasher = blake3::Hasher::new();
    hasher.update(data);
    let mut digest = [0u8; DIGEST_LEN];
    hasher.finalize_xof().fill(&mut digest);
    digest
}
