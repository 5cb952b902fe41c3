//! Command to assert that two paths overlap lexically.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::path::PathBuf;
use upwalk::{overlaps, PathRelationship};

/// Assert that two paths overlap (one lexically contains the other).
///
/// This is the symlink-blind sibling of `contains`: only the spelled-out
/// components are compared, the filesystem is never consulted. Exits 0 when
/// the paths overlap and 1 when they do not.
#[derive(Args)]
pub struct OverlapsCommand {
    /// First path
    #[arg(value_name = "PATH_A")]
    pub path_a: PathBuf,

    /// Second path
    #[arg(value_name = "PATH_B")]
    pub path_b: PathBuf,

    /// Invert the assertion (fail if the paths overlap)
    #[arg(long)]
    pub not: bool,
}

impl OverlapsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let overlapping = overlaps(&self.path_a, &self.path_b);

        let success = if self.not { !overlapping } else { overlapping };

        if success {
            if global.verbose {
                let rel = PathRelationship::between(&self.path_a, &self.path_b);
                println!("{}", rel.description(&self.path_a, &self.path_b));
            }
            Ok(())
        } else {
            let msg = if self.not {
                format!(
                    "Assertion failed: {} overlaps {}",
                    self.path_a.display(),
                    self.path_b.display(),
                )
            } else {
                format!(
                    "Assertion failed: {} does not overlap {}",
                    self.path_a.display(),
                    self.path_b.display(),
                )
            };
            Err(CliError::SemanticFailure(msg))
        }
    }
}
