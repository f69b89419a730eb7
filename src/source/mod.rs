//! Readers for the three survey files.
//!
//! Every reader fails hard: a missing file or a missing key column aborts the
//! whole load.

pub mod long;
pub mod wide;

pub use long::*;
pub use wide::*;

use std::path::Path;

/// Short name used in logs and errors
pub(crate) fn source_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}
