//! Physical (symlink-aware) containment checking.
//!
//! Lexical prefix comparison is not enough to decide whether one path lives
//! inside another: a child that is a symlink, or that sits under a symlinked
//! ancestor, can physically resolve somewhere else entirely. [`contains`]
//! resolves both sides through the OS before comparing, and fails closed:
//! any resolution error answers `false`, never an exception.

use std::path::Path;

use crate::error::Result;
use crate::path::canonicalize::{physical, try_canonicalize};
use crate::path::normalize::absolutize;
use crate::path::relationship::descends;

/// Check whether `child`'s physical location lies within `parent`'s.
///
/// Both paths are anchored (tilde expanded, made absolute) and resolved
/// through the OS before comparison:
///
/// 1. `parent` is canonicalized if it exists, used as given otherwise.
/// 2. `child` is resolved to its physical path; if it does not exist, its
///    deepest existing ancestor is canonicalized and the non-existent suffix
///    re-appended, so a not-yet-created path under a symlinked directory is
///    still judged by where it would physically land.
/// 3. Containment holds iff the relative path from resolved parent to
///    resolved child neither starts with a parent-reference segment nor is
///    absolute (the latter arises when no relative route exists, such as
///    crossing drive boundaries).
///
/// `.` and `..` components are deliberately NOT collapsed lexically: in
/// `link/../x` the `..` names the parent of the link target, so it is
/// resolved by the OS in step 2. A `..` that cannot be resolved physically
/// (its anchor does not exist) fails closed.
///
/// `contains(p, p)` is true, and trailing separators do not affect the
/// result.
///
/// Failure policy: every error (permission denied, symlink loop, a path
/// disappearing mid-check) makes this return `false`. A boundary check must
/// never report containment it could not verify.
///
/// Note the inherent check-then-use window: an ancestor of a non-existent
/// `child` can become a symlink after this check returns. Callers that go on
/// to create the path must account for that race themselves.
///
/// # Examples
///
/// ```no_run
/// use upwalk::path::contain::contains;
/// use std::path::Path;
///
/// assert!(contains(Path::new("/tmp"), Path::new("/tmp")));
/// assert!(contains(Path::new("/tmp"), Path::new("/tmp/child")));
/// assert!(!contains(Path::new("/tmp/child"), Path::new("/tmp")));
/// ```
#[must_use]
pub fn contains(parent: &Path, child: &Path) -> bool {
    match contains_inner(parent, child) {
        Ok(verdict) => verdict,
        Err(e) => {
            log::debug!(
                "containment check of {} within {} failed closed: {e}",
                child.display(),
                parent.display()
            );
            false
        }
    }
}

fn contains_inner(parent: &Path, child: &Path) -> Result<bool> {
    let parent = try_canonicalize(&absolutize(parent)?)?;
    let child = physical(&absolutize(child)?)?;

    Ok(descends(&parent, &child))
}
