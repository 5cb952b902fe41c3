//! Path normalization functions.
//!
//! Two distinct jobs live here:
//!
//! - [`normalize`] and its helpers turn user-supplied paths into clean
//!   absolute paths: tilde expansion, absolutization against the current
//!   directory, and lexical `.`/`..` resolution. The ascension entry points
//!   use this to anchor their start and stop directories.
//! - [`normalize_case`] fixes up the casing of a path on case-insensitive,
//!   case-preserving filesystems by asking the OS for the on-disk spelling.
//!   It is a best-effort cosmetic adjustment, never a correctness gate.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand a leading tilde (~) to the home directory.
///
/// Handles `~` and `~/path`; the `~user` form is rejected.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use upwalk::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("project"));
///
/// // Paths without a tilde pass through unchanged
/// assert_eq!(expand_tilde(Path::new("/abs")).unwrap(), Path::new("/abs"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components in a path lexically.
///
/// No filesystem access: `a/b/..` collapses to `a` even if `b` is a symlink.
/// Symlink-aware resolution is the job of [`crate::path::canonicalize`].
///
/// # Errors
///
/// Returns an error if the path contains more `..` components than it has
/// ancestors (the path would escape the root).
///
/// # Examples
///
/// ```
/// use upwalk::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/a/c"));
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                // Windows drive or UNC prefix
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "Path contains too many '..' components (escapes root)"
                            .to_string(),
                    });
                }
            }
        }
    }

    // Popping everything must not lose the root itself
    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    Ok(result)
}

/// Anchor a path: expand a leading tilde and make it absolute, leaving `.`
/// and `..` components untouched.
///
/// The symlink-aware operations use this instead of [`normalize`]. A `..`
/// that follows a symlink component names the parent of the link *target*;
/// collapsing it lexically would silently reinterpret the path, so dot
/// resolution is left to the canonicalization layer.
///
/// # Errors
///
/// Returns an error if tilde expansion fails or the current directory cannot
/// be determined.
///
/// # Examples
///
/// ```
/// use upwalk::path::normalize::absolutize;
/// use std::path::{Path, PathBuf};
///
/// let anchored = absolutize(Path::new("/a/link/../c")).unwrap();
/// assert_eq!(anchored, PathBuf::from("/a/link/../c"));
/// ```
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Cannot get current directory: {e}"),
        })?;
        Ok(cwd.join(expanded))
    }
}

/// Normalize a path to clean absolute form.
///
/// Expands a leading tilde, joins relative paths onto the current directory,
/// and resolves `.`/`..` components lexically. Does not touch symlinks and
/// does not require the path to exist.
///
/// # Errors
///
/// Returns an error if:
/// - Tilde expansion fails
/// - The current directory cannot be determined
/// - The path contains too many `..` components
///
/// # Examples
///
/// ```no_run
/// use upwalk::path::normalize::normalize;
/// use std::path::Path;
///
/// let normalized = normalize(Path::new("./src")).unwrap();
/// assert!(normalized.is_absolute());
///
/// let normalized = normalize(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(normalized, Path::new("/a/c"));
/// ```
pub fn normalize(path: &Path) -> Result<PathBuf> {
    resolve_components(&absolutize(path)?)
}

/// Adjust a path to the casing stored on disk.
///
/// On case-insensitive but case-preserving filesystems (Windows, macOS) the
/// same file can be referred to with any casing; this resolves the path to
/// the spelling the filesystem actually holds. On other platforms this is an
/// identity function.
///
/// Failure policy: if the path does not exist or canonicalization fails for
/// any reason, the input is returned unchanged. Callers must never rely on
/// this function for correctness.
///
/// # Examples
///
/// ```
/// use upwalk::path::normalize::normalize_case;
/// use std::path::Path;
///
/// // Non-existent paths pass through unchanged on every platform
/// let p = Path::new("/definitely/not/there");
/// assert_eq!(normalize_case(p), p);
/// ```
#[must_use]
pub fn normalize_case(path: &Path) -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    }
    #[cfg(windows)]
    {
        std::fs::canonicalize(path)
            .map(strip_verbatim_prefix)
            .unwrap_or_else(|_| path.to_path_buf())
    }
    #[cfg(not(any(windows, target_os = "macos")))]
    {
        path.to_path_buf()
    }
}

/// Drop the `\\?\` verbatim prefix that `fs::canonicalize` adds on Windows.
///
/// Only plain disk paths are rewritten; UNC and device paths keep their
/// prefix because stripping it would change meaning.
#[cfg(windows)]
fn strip_verbatim_prefix(path: PathBuf) -> PathBuf {
    use std::path::Prefix;

    let is_verbatim_disk = matches!(
        path.components().next(),
        Some(Component::Prefix(p)) if matches!(p.kind(), Prefix::VerbatimDisk(_))
    );

    if is_verbatim_disk {
        if let Some(s) = path.to_str() {
            if let Some(stripped) = s.strip_prefix(r"\\?\") {
                return PathBuf::from(stripped);
            }
        }
    }
    path
}
