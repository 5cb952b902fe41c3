//! Command to assert that one path is physically inside another.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::path::PathBuf;
use upwalk::contains;

/// Assert that CHILD is physically inside PARENT.
///
/// Both paths are resolved through symlinks before comparison, so a symlink
/// that points outside PARENT fails the check even though its name sits
/// inside. Exits 0 when the containment holds and 1 when it does not.
#[derive(Args)]
pub struct ContainsCommand {
    /// The containing directory
    #[arg(value_name = "PARENT")]
    pub parent: PathBuf,

    /// The path expected to be inside PARENT
    #[arg(value_name = "CHILD")]
    pub child: PathBuf,

    /// Invert the assertion (fail if CHILD is inside PARENT)
    #[arg(long)]
    pub not: bool,
}

impl ContainsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let inside = contains(&self.parent, &self.child);

        let success = if self.not { !inside } else { inside };

        if success {
            if global.verbose {
                println!(
                    "{} is{} inside {}",
                    self.child.display(),
                    if inside { "" } else { " not" },
                    self.parent.display(),
                );
            }
            Ok(())
        } else {
            let msg = if self.not {
                format!(
                    "Assertion failed: {} is inside {}",
                    self.child.display(),
                    self.parent.display(),
                )
            } else {
                format!(
                    "Assertion failed: {} is not inside {}",
                    self.child.display(),
                    self.parent.display(),
                )
            };
            Err(CliError::SemanticFailure(msg))
        }
    }
}
