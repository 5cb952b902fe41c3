//! Lexical path relationship checking.
//!
//! Everything in this module is computed from path components alone: no
//! symlink resolution, no existence checks. That makes [`overlaps`] cheap
//! enough for directory-boundary pre-checks, and makes [`relative_from`] the
//! shared final step of the security-sensitive physical containment check in
//! [`crate::path::contain`].

use std::path::{Component, Path, PathBuf};

/// Compute the relative path from `base` to `target` lexically.
///
/// Both paths are interpreted as component sequences; nothing is resolved on
/// disk. Returns:
///
/// - `Some(rel)` where `base.join(rel)` names the same location as `target`
///   (an empty `rel` means the paths are equal);
/// - `Some(target)` verbatim when no relative route exists but `target` is
///   absolute (mixed absolute/relative inputs, or differing Windows drive
///   prefixes); callers detect this case via `rel.is_absolute()`;
/// - `None` when no route can be computed at all (relative `target` against
///   an absolute `base`, or an unnormalized `..` in `base`).
///
/// # Examples
///
/// ```
/// use upwalk::path::relationship::relative_from;
/// use std::path::{Path, PathBuf};
///
/// let rel = relative_from(Path::new("/a/b"), Path::new("/a/b/c/d")).unwrap();
/// assert_eq!(rel, PathBuf::from("c/d"));
///
/// let rel = relative_from(Path::new("/a/b"), Path::new("/a/x")).unwrap();
/// assert_eq!(rel, PathBuf::from("../x"));
///
/// let rel = relative_from(Path::new("/a"), Path::new("/a")).unwrap();
/// assert_eq!(rel, PathBuf::new());
/// ```
#[must_use]
pub fn relative_from(base: &Path, target: &Path) -> Option<PathBuf> {
    if base.is_absolute() != target.is_absolute() {
        return if target.is_absolute() {
            Some(target.to_path_buf())
        } else {
            None
        };
    }

    // Differing drive/share prefixes: no relative route exists on Windows
    if let (Some(Component::Prefix(bp)), Some(Component::Prefix(tp))) =
        (base.components().next(), target.components().next())
    {
        if bp != tp {
            return Some(target.to_path_buf());
        }
    }

    let mut target_iter = target.components();
    let mut base_iter = base.components();
    let mut comps: Vec<Component> = Vec::new();

    loop {
        match (target_iter.next(), base_iter.next()) {
            (None, None) => break,
            (Some(t), None) => {
                comps.push(t);
                comps.extend(target_iter.by_ref());
                break;
            }
            (None, _) => comps.push(Component::ParentDir),
            (Some(t), Some(b)) if comps.is_empty() && t == b => (),
            (Some(t), Some(Component::CurDir)) => comps.push(t),
            (Some(_), Some(Component::ParentDir)) => return None,
            (Some(t), Some(_)) => {
                comps.push(Component::ParentDir);
                for _ in base_iter.by_ref() {
                    comps.push(Component::ParentDir);
                }
                comps.push(t);
                comps.extend(target_iter.by_ref());
                break;
            }
        }
    }

    Some(comps.iter().map(|c| c.as_os_str()).collect())
}

/// Check whether two paths overlap.
///
/// True if either path is an ancestor-or-equal of the other, judged purely
/// lexically: the relative path between them in one direction or the other
/// must be empty or free of a leading parent-reference segment.
///
/// This is intentionally cheap and symlink-blind: a fast pre-check for
/// directory boundaries, not a security gate. Use
/// [`crate::path::contain::contains`] when symlinks matter.
///
/// # Examples
///
/// ```
/// use upwalk::path::relationship::overlaps;
/// use std::path::Path;
///
/// assert!(overlaps(Path::new("/a"), Path::new("/a/b/c")));
/// assert!(overlaps(Path::new("/a/b/c"), Path::new("/a")));
/// assert!(overlaps(Path::new("/a"), Path::new("/a/")));
/// assert!(!overlaps(Path::new("/a/b"), Path::new("/a/c")));
/// ```
#[must_use]
pub fn overlaps(a: &Path, b: &Path) -> bool {
    PathRelationship::between(a, b).is_hierarchical()
}

/// Relationship between two paths in the directory hierarchy.
///
/// # Examples
///
/// ```
/// use upwalk::path::PathRelationship;
/// use std::path::Path;
///
/// let rel = PathRelationship::between(Path::new("/home/user"), Path::new("/home/user/project"));
/// assert_eq!(rel, PathRelationship::Ancestor);
/// assert!(rel.is_hierarchical());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same after comparison cleanup.
    Same,

    /// Neither path contains the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// Trailing separators are stripped before comparison so `/a/` and `/a`
    /// compare equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use upwalk::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// assert_eq!(
    ///     PathRelationship::between(Path::new("/a"), Path::new("/a/b")),
    ///     PathRelationship::Ancestor
    /// );
    /// assert_eq!(
    ///     PathRelationship::between(Path::new("/a/b"), Path::new("/a")),
    ///     PathRelationship::Descendant
    /// );
    /// assert_eq!(
    ///     PathRelationship::between(Path::new("/a"), Path::new("/b")),
    ///     PathRelationship::Unrelated
    /// );
    /// ```
    #[must_use]
    pub fn between(path1: &Path, path2: &Path) -> Self {
        let p1 = normalize_for_comparison(path1);
        let p2 = normalize_for_comparison(path2);

        if p1 == p2 {
            return Self::Same;
        }

        if descends(&p1, &p2) {
            return Self::Ancestor;
        }

        if descends(&p2, &p1) {
            return Self::Descendant;
        }

        Self::Unrelated
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// Returns `true` for `Ancestor`, `Descendant`, or `Same`.
    ///
    /// # Examples
    ///
    /// ```
    /// use upwalk::path::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use upwalk::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// let desc = PathRelationship::Ancestor.description(Path::new("/a"), Path::new("/a/b"));
    /// assert!(desc.contains("ancestor"));
    /// ```
    #[must_use]
    pub fn description(&self, path1: &Path, path2: &Path) -> String {
        match self {
            Self::Ancestor => {
                format!("{} is an ancestor of {}", path1.display(), path2.display())
            }
            Self::Descendant => {
                format!("{} is a descendant of {}", path1.display(), path2.display())
            }
            Self::Same => {
                format!(
                    "{} and {} are the same path",
                    path1.display(),
                    path2.display()
                )
            }
            Self::Unrelated => {
                format!(
                    "{} and {} are unrelated paths",
                    path1.display(),
                    path2.display()
                )
            }
        }
    }
}

/// Check whether `target` sits at or below `base`, judged from the lexical
/// relative path between them.
pub(crate) fn descends(base: &Path, target: &Path) -> bool {
    match relative_from(base, target) {
        Some(rel) => {
            !rel.is_absolute() && rel.components().next() != Some(Component::ParentDir)
        }
        None => false,
    }
}

/// Strip a trailing separator so `/a/` and `/a` compare equal. Roots keep
/// their separator: stripping `C:\` would leave the drive-relative `C:`,
/// which names a different location.
fn normalize_for_comparison(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();

    if path.parent().is_some() {
        if let Some(s) = p.to_str() {
            if s.len() > 1 && (s.ends_with('/') || s.ends_with('\\')) {
                p = PathBuf::from(&s[..s.len() - 1]);
            }
        }
    }

    p
}
