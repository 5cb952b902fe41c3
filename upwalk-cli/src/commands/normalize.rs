//! Command to print the normalized form of a path.

use crate::error::CliError;
use crate::utils::{normalize_path, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use upwalk::normalize_case;

/// Print the normalized form of a path.
///
/// Normalization expands a leading tilde, makes the path absolute against
/// the current directory, and resolves `.` and `..` lexically. Symlinks are
/// not followed and the path does not need to exist.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Also adjust to on-disk casing (no-op on case-sensitive filesystems)
    #[arg(long)]
    pub case: bool,
}

impl NormalizeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let normalized = normalize_path(&self.path)?;

        let resolved = if self.case {
            normalize_case(&normalized)
        } else {
            normalized
        };

        println!("{}", resolved.display());
        Ok(())
    }
}
