//! Glob-up command implementation.
//!
//! This module implements the `glob-up` command, which walks upward from a
//! start directory and matches files beneath each level against a glob
//! pattern, nearest level first.

use crate::commands::find_up::print_matches;
use crate::error::CliError;
use crate::utils::{normalize_path, resolve_start, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use upwalk::glob_up;
use upwalk::path::ascend::check_pattern;

/// Search upward with a glob pattern.
#[derive(Args)]
pub struct GlobUpCommand {
    /// Glob pattern to match (e.g. "*.lock" or "**/*.config.js")
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Directory to start from (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    pub start: Option<PathBuf>,

    /// Directory at which to stop ascending (inclusive)
    #[arg(long, value_name = "PATH")]
    pub stop: Option<PathBuf>,

    /// Emit matches as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl GlobUpCommand {
    /// Execute the glob-up command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        // The library treats an invalid pattern as "no matches"; at the CLI
        // boundary it is a usage error and must say so
        check_pattern(&self.pattern).map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let start = resolve_start(self.start)?;
        let stop = self.stop.as_deref().map(normalize_path).transpose()?;

        let matches = glob_up(&self.pattern, &start, stop.as_deref());

        if matches.is_empty() {
            return Err(CliError::SemanticFailure(format!(
                "No file matching '{}' found above {}",
                self.pattern,
                start.display(),
            )));
        }

        print_matches(&matches, self.json)
    }
}
