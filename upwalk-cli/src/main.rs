//! Main entry point for the upwalk CLI.
//!
//! This is the command-line interface for symlink-aware path queries.
//! It provides commands for upward search and containment checks:
//! - `find-up`: Search upward for files or directories by name
//! - `glob-up`: Search upward with a glob pattern
//! - `contains`: Check physical (symlink-resolved) containment
//! - `overlaps`: Check lexical path overlap
//! - `normalize`: Print the normalized form of a path

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = upwalk::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::FindUp(cmd) => cmd.execute(&global),
        cli::Command::GlobUp(cmd) => cmd.execute(&global),
        cli::Command::Contains(cmd) => cmd.execute(&global),
        cli::Command::Overlaps(cmd) => cmd.execute(&global),
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
