//! Path normalization shared by the hashing pipeline.

use std::path::{Path, PathBuf};

/// Resolves a path against the current working directory without touching
/// the filesystem.
///
/// Normalization is lexical: `.` components collapse but symlinks are not
/// resolved, so `./a.txt` and `/cwd/a.txt` normalize to the same value while
/// two distinct links to one file stay distinct. Falls back to the path as
/// given if the working directory is unavailable.
pub(crate) fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
