//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, ContainsCommand, FindUpCommand, GlobUpCommand, NormalizeCommand,
    OverlapsCommand,
};
use clap::{Parser, Subcommand};

/// Command-line tool for upward path search and containment checks.
#[derive(Parser)]
#[command(name = "upwalk")]
#[command(version, about = "Search upward for files and check path containment", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Search upward for files or directories by name
    FindUp(FindUpCommand),

    /// Search upward with a glob pattern
    GlobUp(GlobUpCommand),

    /// Check that one path is physically inside another
    Contains(ContainsCommand),

    /// Check that two paths overlap lexically
    Overlaps(OverlapsCommand),

    /// Print the normalized form of a path
    Normalize(NormalizeCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
