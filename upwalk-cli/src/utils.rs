//! Utility functions for CLI operations.
//!
//! This module provides common helpers used across CLI commands,
//! mainly path resolution of user-supplied arguments.

use crate::error::CliError;
use std::env;
use std::path::{Path, PathBuf};
use upwalk::path::normalize;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Copy)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Resolve a start directory, using CWD if not specified.
///
/// # Path Handling Rules
///
/// - Explicit paths (provided by user) are normalized but NOT canonicalized
/// - Implicit paths (CWD) are taken from the current directory
///
/// Normalization makes paths absolute and expands ~, but doesn't follow
/// symlinks. This allows paths that don't exist yet and keeps upward walks
/// anchored at the directory the user named, not its symlink target.
pub fn resolve_start(path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    let path_to_resolve = match path {
        Some(p) => p,
        None => env::current_dir()?,
    };

    normalize_path(&path_to_resolve)
}

/// Normalize a path (make absolute, expand ~, etc.) without following symlinks.
pub fn normalize_path(path: &Path) -> Result<PathBuf, CliError> {
    normalize::normalize(path).map_err(CliError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_start_defaults_to_cwd() {
        let resolved = resolve_start(None).unwrap();
        assert!(resolved.is_absolute());
    }

    #[test]
    fn test_resolve_start_normalizes_dots() {
        let resolved = resolve_start(Some(PathBuf::from("/a/b/../c"))).unwrap();
        assert_eq!(resolved, PathBuf::from("/a/c"));
    }
}
