//! Path resolution, containment, and upward search.
//!
//! This module is the core of the library. It answers two questions that
//! sound simple and are not:
//!
//! - *Is path B really inside path A?* Lexical prefix comparison lies as
//!   soon as a symlink is involved, so [`contain::contains`] resolves both
//!   sides to their physical locations first. The cheap, symlink-blind
//!   variant is [`relationship::overlaps`], meant for fast boundary
//!   pre-checks only.
//! - *Where, walking upward from here, does a given name or pattern
//!   appear?* [`ascend::find_up`], [`ascend::up`], and [`ascend::glob_up`]
//!   ascend from a start directory toward a stop boundary (inclusive) or
//!   the filesystem root, collecting matches nearest-first.
//!
//! Supporting layers: [`normalize`] turns user input into clean absolute
//! paths (and fixes casing on case-insensitive filesystems), and
//! [`canonicalize`] holds the symlink-resolving primitives, including
//! best-effort physical resolution of paths that do not exist yet.
//!
//! Every boolean or search operation here degrades on error instead of
//! propagating it: containment and overlap answer `false`, searches skip
//! the unreadable level and continue. Callers rely on these primitives for
//! boundary checks, so "fail closed, never throw" is part of the contract.

pub mod ascend;
pub mod canonicalize;
pub mod contain;
pub mod normalize;
pub mod relationship;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types and operations
pub use ascend::{find_up, glob_up, up, Up};
pub use contain::contains;
pub use normalize::normalize_case;
pub use relationship::{overlaps, PathRelationship};
