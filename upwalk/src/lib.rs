#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # upwalk
//!
//! Symlink-aware path containment checks and upward directory search.
//!
//! This library answers two questions that config-file discovery and
//! workspace-boundary validation keep running into:
//!
//! - [`contains`]: is one path *physically* inside another, even when
//!   symlinks make the lexical answer wrong?
//! - [`find_up`] / [`up`] / [`glob_up`]: walking upward from a directory
//!   toward a stop boundary or the filesystem root, where does a target
//!   name or glob pattern match?
//!
//! The cheap lexical sibling of `contains` is [`overlaps`], and
//! [`normalize_case`] adjusts a path to its on-disk casing on
//! case-insensitive filesystems.
//!
//! All of these operations fail closed: I/O errors answer `false` or skip a
//! level, they are never raised to the caller. Filesystem calls can block
//! (a deep walk over a slow network mount can stall), so callers needing a
//! timeout must impose one externally.
//!
//! ## Examples
//!
//! ```no_run
//! use std::path::Path;
//! use upwalk::{contains, find_up};
//!
//! // Physical containment: symlinks cannot fake their way inside
//! if contains(Path::new("/workspace"), Path::new("/workspace/src/lib.rs")) {
//!     // safe to treat as part of the workspace
//! }
//!
//! // Collect every project marker between here and the project root
//! let markers = find_up(
//!     "package.json",
//!     Path::new("/proj/src/components"),
//!     Some(Path::new("/proj")),
//! );
//! ```

pub mod error;
pub mod logging;
pub mod path;

// Re-export key types and operations at the crate root for convenience
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{contains, find_up, glob_up, normalize_case, overlaps, up, PathRelationship, Up};
