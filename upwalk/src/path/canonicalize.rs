//! Canonical (physical) path resolution.
//!
//! These primitives resolve symlinks through the OS, which is what makes the
//! containment check in [`crate::path::contain`] trustworthy. The key
//! addition over `std::fs::canonicalize` is handling paths that do not exist
//! yet: [`canonicalize_existing`] resolves the deepest existing ancestor and
//! reports the non-existent remainder, and [`physical`] stitches the two back
//! together into a best-effort physical path.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Canonicalize a path by following symlinks.
///
/// Thin wrapper over `std::fs::canonicalize` that maps the common error
/// kinds onto the library error type. The path must exist. Symlink loops
/// surface as an I/O error from the OS, never as a hang.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist (`PathNotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - Any other I/O error occurs (including symlink loops)
///
/// # Examples
///
/// ```no_run
/// use upwalk::path::canonicalize::canonicalize;
/// use std::path::Path;
///
/// let canonical = canonicalize(Path::new("/tmp")).unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::PathNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })
}

/// Canonicalize a path, returning the input unchanged if it does not exist.
///
/// # Errors
///
/// Returns an error only for I/O failures other than "not found".
///
/// # Examples
///
/// ```no_run
/// use upwalk::path::canonicalize::try_canonicalize;
/// use std::path::Path;
///
/// // Existing paths are resolved, missing ones pass through
/// let resolved = try_canonicalize(Path::new("/nonexistent")).unwrap();
/// assert_eq!(resolved, Path::new("/nonexistent"));
/// ```
pub fn try_canonicalize(path: &Path) -> Result<PathBuf> {
    match canonicalize(path) {
        Ok(canonical) => Ok(canonical),
        Err(Error::PathNotFound { .. }) => Ok(path.to_path_buf()),
        Err(e) => Err(e),
    }
}

/// Canonicalize the existing portion of a path.
///
/// For non-existent paths, walks the ancestor chain until an existing
/// ancestor is found, canonicalizes that, and returns the remaining
/// non-existent components separately.
///
/// # Returns
///
/// A tuple of:
/// - The canonicalized existing portion
/// - The remaining non-existent components (if any)
///
/// # Errors
///
/// Returns an error if:
/// - No existing ancestor can be found
/// - Canonicalization of the existing portion fails
///
/// # Examples
///
/// ```no_run
/// use upwalk::path::canonicalize::canonicalize_existing;
/// use std::path::{Path, PathBuf};
///
/// // With /tmp existing but /tmp/planned/file not yet created:
/// let (canonical, remainder) =
///     canonicalize_existing(Path::new("/tmp/planned/file")).unwrap();
/// // canonical is the resolved /tmp, remainder is Some("planned/file")
/// ```
pub fn canonicalize_existing(path: &Path) -> Result<(PathBuf, Option<PathBuf>)> {
    // Fast path: the whole thing exists
    if let Ok(canonical) = canonicalize(path) {
        return Ok((canonical, None));
    }

    let mut current = path.to_path_buf();
    let mut non_existent = Vec::new();

    loop {
        if current.exists() {
            let canonical = canonicalize(&current)?;

            let remainder = if non_existent.is_empty() {
                None
            } else {
                non_existent.reverse();
                Some(non_existent.into_iter().collect())
            };

            return Ok((canonical, remainder));
        }

        match current.file_name() {
            Some(name) => {
                non_existent.push(name.to_os_string());
                current.pop();
            }
            None => {
                return Err(Error::InvalidPath {
                    path: path.to_path_buf(),
                    reason: "Cannot find any existing portion of path".to_string(),
                });
            }
        }
    }
}

/// Resolve a path to its best-effort physical location.
///
/// For existing paths this is plain canonicalization. For paths that do not
/// exist yet, the deepest existing ancestor is canonicalized and the
/// non-existent suffix re-appended, so a would-be path under a symlinked
/// directory still resolves to where it would physically land.
///
/// This is a check-then-use primitive: between this call and any later
/// filesystem operation an ancestor could be replaced by a symlink. That
/// TOCTOU window is inherent to the approach and is the caller's to manage.
///
/// # Errors
///
/// Returns an error if no portion of the path exists or resolution of the
/// existing portion fails.
///
/// # Examples
///
/// ```no_run
/// use upwalk::path::canonicalize::physical;
/// use std::path::Path;
///
/// let resolved = physical(Path::new("/tmp/not/yet/created")).unwrap();
/// assert!(resolved.is_absolute());
/// ```
pub fn physical(path: &Path) -> Result<PathBuf> {
    let (canonical, remainder) = canonicalize_existing(path)?;
    Ok(match remainder {
        Some(rest) => canonical.join(rest),
        None => canonical,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_canonicalize_nonexistent() {
        let result = canonicalize(Path::new("/nonexistent/path/xyz"));
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::PathNotFound { .. }));
    }

    #[test]
    fn test_canonicalize_existing_full_path_exists() {
        let dir = tempdir().unwrap();
        let path = dir.path();

        let (canonical, remainder) = canonicalize_existing(path).unwrap();
        assert_eq!(canonical, fs::canonicalize(path).unwrap());
        assert!(remainder.is_none());
    }

    #[test]
    fn test_canonicalize_existing_partial() {
        let dir = tempdir().unwrap();
        let existing = dir.path();
        let full = existing.join("nonexistent").join("path");

        let (canonical, remainder) = canonicalize_existing(&full).unwrap();
        assert_eq!(canonical, fs::canonicalize(existing).unwrap());
        assert_eq!(remainder, Some(PathBuf::from("nonexistent").join("path")));
    }

    #[test]
    fn test_try_canonicalize_existing() {
        let dir = tempdir().unwrap();
        let result = try_canonicalize(dir.path()).unwrap();
        assert_eq!(result, fs::canonicalize(dir.path()).unwrap());
    }

    #[test]
    fn test_try_canonicalize_nonexistent() {
        let path = Path::new("/nonexistent/path");
        let result = try_canonicalize(path).unwrap();
        assert_eq!(result, path);
    }

    #[test]
    fn test_physical_existing() {
        let dir = tempdir().unwrap();
        let resolved = physical(dir.path()).unwrap();
        assert_eq!(resolved, fs::canonicalize(dir.path()).unwrap());
    }

    #[test]
    fn test_physical_reappends_missing_suffix() {
        let dir = tempdir().unwrap();
        let planned = dir.path().join("a").join("b.txt");

        let resolved = physical(&planned).unwrap();
        let expected = fs::canonicalize(dir.path()).unwrap().join("a").join("b.txt");
        assert_eq!(resolved, expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_canonicalize_follows_symlink() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        let link = dir.path().join("link");

        fs::write(&target, "test").unwrap();
        symlink(&target, &link).unwrap();

        let canonical = canonicalize(&link).unwrap();
        assert_eq!(canonical, fs::canonicalize(&target).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_canonicalize_symlink_loop_is_error_not_hang() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let link1 = dir.path().join("link1");
        let link2 = dir.path().join("link2");

        symlink(&link2, &link1).unwrap();
        symlink(&link1, &link2).unwrap();

        // The OS reports ELOOP; we must get an error back, not spin
        let result = canonicalize(&link1);
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_physical_through_symlinked_ancestor() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let real = dir.path().join("real");
        let alias = dir.path().join("alias");

        fs::create_dir(&real).unwrap();
        symlink(&real, &alias).unwrap();

        // A not-yet-created file under the alias resolves into the real dir
        let resolved = physical(&alias.join("new.txt")).unwrap();
        let expected = fs::canonicalize(&real).unwrap().join("new.txt");
        assert_eq!(resolved, expected);
    }
}
