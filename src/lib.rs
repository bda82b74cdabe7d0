//! Hashwalk: deterministic content fingerprinting for directory trees.
//!
//! Walks a root directory depth-first in lexical sibling order, prunes a
//! configurable set of directory names, streams every remaining regular file
//! through a 128-bit BLAKE3 digest, and emits one `<hex-digest> <path>` line
//! per file in visitation order.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod scan;
