//! Input file discovery
//!
//! Enumerates observation files matching a glob pattern. Matches are sorted
//! lexicographically so a run does not depend on file-system enumeration
//! order, and an empty match set fails immediately instead of surfacing
//! later as a stacking error.

use crate::errors::{NimbostatError, Result};
use glob::glob;
use std::path::PathBuf;

/// Enumerate input files matching `pattern`, sorted lexicographically
///
/// # Errors
///
/// Returns an error if the pattern is invalid, a matched path cannot be
/// read, or nothing matches.
pub fn discover_inputs(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in glob(pattern)? {
        paths.push(entry?);
    }
    paths.sort();

    if paths.is_empty() {
        return Err(NimbostatError::NoInputFiles {
            pattern: pattern.to_string(),
        });
    }

    Ok(paths)
}
