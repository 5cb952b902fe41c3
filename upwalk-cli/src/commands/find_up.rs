//! Find-up command implementation.
//!
//! This module implements the `find-up` command, which walks upward from a
//! start directory and prints every location where one of the target names
//! exists, nearest level first.

use crate::error::CliError;
use crate::utils::{normalize_path, resolve_start, GlobalOptions};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use upwalk::up;

/// Search upward for files or directories by name.
#[derive(Args)]
pub struct FindUpCommand {
    /// Names to search for (checked in the given order at each level)
    #[arg(value_name = "NAME", required = true, num_args = 1..)]
    pub names: Vec<String>,

    /// Directory to start from (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    pub start: Option<PathBuf>,

    /// Directory at which to stop ascending (inclusive)
    #[arg(long, value_name = "PATH")]
    pub stop: Option<PathBuf>,

    /// Print only the nearest match
    #[arg(long)]
    pub first: bool,

    /// Emit matches as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl FindUpCommand {
    /// Execute the find-up command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let start = resolve_start(self.start)?;
        let stop = self.stop.as_deref().map(normalize_path).transpose()?;

        let walk = up(self.names.iter().cloned(), &start, stop.as_deref());
        let matches: Vec<PathBuf> = if self.first {
            walk.take(1).collect()
        } else {
            walk.collect()
        };

        if matches.is_empty() {
            let boundary = match &stop {
                Some(stop) => stop.display().to_string(),
                None => "the filesystem root".to_string(),
            };
            return Err(CliError::SemanticFailure(format!(
                "No match for {} found between {} and {}",
                self.names.join(", "),
                start.display(),
                boundary,
            )));
        }

        print_matches(&matches, self.json)
    }
}

/// Print matched paths either line by line or as a JSON array.
pub fn print_matches(matches: &[PathBuf], json: bool) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    if json {
        let json_data: Vec<serde_json::Value> = matches
            .iter()
            .map(|p| serde_json::Value::String(p.display().to_string()))
            .collect();

        serde_json::to_writer_pretty(&mut handle, &json_data)
            .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
        writeln!(handle)?;
    } else {
        for path in matches {
            writeln!(handle, "{}", path.display())?;
        }
    }

    Ok(())
}
