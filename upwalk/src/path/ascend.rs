//! Upward directory traversal.
//!
//! All entry points share one ascension shape: start at a directory, visit
//! it and each successive parent, and stop after processing the stop
//! boundary (inclusive) or upon reaching the filesystem root. The variants
//! differ in what they look for at each level:
//!
//! - [`find_up`]: one target name, eager collection.
//! - [`up`]: several target names, lazy [`Up`] iterator that can be
//!   abandoned after the first hit without paying for the full ascension.
//! - [`glob_up`]: a recursive glob scan scoped to each level's directory.
//!
//! Ascension is a best-effort search: an unreadable level means "nothing
//! found here" and the walk continues upward. No entry point returns an
//! error.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::path::normalize::normalize;

/// Iterator over the directory levels of one ascension.
///
/// Yields the normalized start directory, then each parent, and finishes
/// after yielding the stop directory (if it is ever reached) or the root.
/// Parent computation is lexical; symlinks are not followed for the
/// ascension step itself.
#[derive(Debug)]
struct Ascent {
    current: Option<PathBuf>,
    stop: Option<PathBuf>,
}

impl Ascent {
    /// Anchor an ascension at `start`, bounded by `stop`.
    ///
    /// Both anchors are normalized to clean absolute paths. A start that
    /// cannot be normalized produces an empty ascension (fail closed); a
    /// stop that cannot be normalized is ignored and the walk runs to the
    /// root.
    fn new(start: &Path, stop: Option<&Path>) -> Self {
        let current = match normalize(start) {
            Ok(dir) => Some(dir),
            Err(e) => {
                log::debug!("cannot anchor ascension at {}: {e}", start.display());
                None
            }
        };
        let stop = stop.and_then(|s| match normalize(s) {
            Ok(dir) => Some(dir),
            Err(e) => {
                log::debug!("ignoring unusable stop boundary {}: {e}", s.display());
                None
            }
        });

        Self { current, stop }
    }
}

impl Iterator for Ascent {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        let dir = self.current.take()?;

        // The stop boundary is inclusive: yield it, then end. At the root
        // the parent computation reaches its fixed point and ends the walk.
        if self.stop.as_deref() != Some(dir.as_path()) {
            self.current = dir.parent().map(Path::to_path_buf);
        }

        Some(dir)
    }
}

/// Search upward for a file or directory named `target`.
///
/// Visits `start`, each of its ancestors, and `stop` (inclusive, when
/// reached), collecting `directory/target` wherever it exists. Matches are
/// ordered nearest-to-`start` first and are absolute paths.
///
/// Levels that cannot be read (permission denied, vanished mid-walk) count
/// as "not found" and the ascension continues above them.
///
/// # Examples
///
/// ```no_run
/// use upwalk::path::ascend::find_up;
/// use std::path::Path;
///
/// let configs = find_up("config.json", Path::new("/proj/src"), Some(Path::new("/proj")));
/// // nearest first: /proj/src/config.json before /proj/config.json
/// for config in configs {
///     println!("{}", config.display());
/// }
/// ```
#[must_use]
pub fn find_up(target: &str, start: &Path, stop: Option<&Path>) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for dir in Ascent::new(start, stop) {
        let candidate = dir.join(target);
        // exists() treats I/O errors as absence, which is the degraded
        // behavior we want here
        if candidate.exists() {
            found.push(candidate);
        }
    }
    found
}

/// Lazy upward search over a set of target names.
///
/// Created by [`up`]. Each call to `next` returns the next match; levels are
/// only examined as the iterator is advanced, so a consumer that stops after
/// the first hit does not pay for the rest of the ascension. The iterator is
/// finite and not restartable; begin a fresh ascension to search again.
#[derive(Debug)]
pub struct Up {
    levels: Ascent,
    targets: Vec<String>,
    pending: VecDeque<PathBuf>,
}

impl Iterator for Up {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            if let Some(hit) = self.pending.pop_front() {
                return Some(hit);
            }

            let dir = self.levels.next()?;
            // Matches within one level keep the order of the target list
            for target in &self.targets {
                let candidate = dir.join(target);
                if candidate.exists() {
                    self.pending.push_back(candidate);
                }
            }
        }
    }
}

/// Search upward lazily for any of several target names.
///
/// Same ascension as [`find_up`], but every name in `targets` is tested at
/// each level, and matches are yielded incrementally: within a level, in the
/// order the target list gives them; across levels, nearest-to-`start`
/// first.
///
/// # Examples
///
/// ```no_run
/// use upwalk::path::ascend::up;
/// use std::path::Path;
///
/// // Take only the closest project marker, skipping the rest of the walk
/// let nearest = up(["package.json", "deno.json"], Path::new("/proj/src"), None).next();
/// ```
pub fn up<I, S>(targets: I, start: &Path, stop: Option<&Path>) -> Up
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Up {
        levels: Ascent::new(start, stop),
        targets: targets.into_iter().map(Into::into).collect(),
        pending: VecDeque::new(),
    }
}

/// Validate a glob pattern without running a scan.
///
/// [`glob_up`] swallows invalid patterns by design; callers that want to
/// reject bad input up front (the CLI does) can check here once.
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] when the pattern does not compile.
///
/// # Examples
///
/// ```
/// use upwalk::path::ascend::check_pattern;
///
/// assert!(check_pattern("*.test.*").is_ok());
/// assert!(check_pattern("a{b").is_err());
/// ```
pub fn check_pattern(pattern: &str) -> Result<()> {
    compile_pattern(pattern).map(|_| ())
}

fn compile_pattern(pattern: &str) -> Result<GlobMatcher> {
    // Shell-style semantics: `*` stays within one path component, crossing
    // directories takes an explicit `**`
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| Error::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
}

/// Search upward with a recursive glob at every level.
///
/// At each ascended directory a recursive scan is performed, scoped to that
/// directory: symlinked directories are followed, hidden entries are
/// included, and only files are matched (the pattern is applied to the path
/// relative to the level's directory). Matches are grouped by level,
/// nearest level first and sorted within a level. A file that matches at
/// several levels appears once per level.
///
/// An invalid pattern produces zero matches rather than an error; validate
/// with [`check_pattern`] first if rejection is wanted. Unreadable entries
/// and symlink loops inside a scan are skipped.
///
/// # Examples
///
/// ```no_run
/// use upwalk::path::ascend::glob_up;
/// use std::path::Path;
///
/// let fixtures = glob_up("**/*.test.js", Path::new("/proj/src"), Some(Path::new("/proj")));
/// ```
#[must_use]
pub fn glob_up(pattern: &str, start: &Path, stop: Option<&Path>) -> Vec<PathBuf> {
    let matcher = match compile_pattern(pattern) {
        Ok(matcher) => matcher,
        Err(e) => {
            log::debug!("glob ascension produced no matches: {e}");
            return Vec::new();
        }
    };

    let mut found = Vec::new();
    for dir in Ascent::new(start, stop) {
        let mut level = Vec::new();

        let walker = WalkDir::new(&dir).follow_links(true);
        for entry in walker.into_iter().filter_map(|result| match result {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("skipping unreadable entry under {}: {e}", dir.display());
                None
            }
        }) {
            if !entry.file_type().is_file() {
                continue;
            }
            let matched = entry
                .path()
                .strip_prefix(&dir)
                .map(|rel| matcher.is_match(rel))
                .unwrap_or(false);
            if matched {
                level.push(entry.path().to_path_buf());
            }
        }

        // Directory iteration order is platform-dependent; sort each level
        // so results are deterministic
        level.sort();
        found.extend(level);
    }

    found
}
