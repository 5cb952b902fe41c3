//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Binary name the completion scripts are generated for
const BIN_NAME: &str = "upwalk";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            eprintln!("# Generating {} completion script", self.shell);
            eprintln!("# Run the following command to enable completions:");

            match self.shell {
                Shell::Bash => {
                    eprintln!(
                        "#   upwalk completions bash > ~/.local/share/bash-completion/completions/upwalk"
                    );
                    eprintln!("# Or source it directly in ~/.bashrc:");
                    eprintln!("#   eval \"$(upwalk completions bash)\"");
                }
                Shell::Zsh => {
                    eprintln!("#   upwalk completions zsh > ~/.zsh/completions/_upwalk");
                    eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
                    eprintln!("# Or add to ~/.zshrc:");
                    eprintln!("#   eval \"$(upwalk completions zsh)\"");
                }
                Shell::Fish => {
                    eprintln!(
                        "#   upwalk completions fish > ~/.config/fish/completions/upwalk.fish"
                    );
                    eprintln!("# Or add to config.fish:");
                    eprintln!("#   upwalk completions fish | source");
                }
                Shell::PowerShell => {
                    eprintln!("#   upwalk completions powershell > $PROFILE");
                    eprintln!("# Or run:");
                    eprintln!("#   upwalk completions powershell | Out-String | Invoke-Expression");
                }
                _ => {
                    // Remaining shells need no custom instructions
                }
            }

            eprintln!();
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
