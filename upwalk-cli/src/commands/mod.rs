//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `find_up`: Search upward for files or directories by name
//! - `glob_up`: Search upward with a glob pattern
//! - `contains`: Assert physical (symlink-resolved) containment
//! - `overlaps`: Assert lexical path overlap
//! - `normalize`: Print the normalized form of a path
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod contains;
pub mod find_up;
pub mod glob_up;
pub mod normalize;
pub mod overlaps;

pub use completions::CompletionsCommand;
pub use contains::ContainsCommand;
pub use find_up::FindUpCommand;
pub use glob_up::GlobUpCommand;
pub use normalize::NormalizeCommand;
pub use overlaps::OverlapsCommand;
