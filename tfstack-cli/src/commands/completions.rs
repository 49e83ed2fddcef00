//! `tfstack completions <SHELL>`: print a shell completion script.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "tfstack";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# Install with:\n#   {hint}");
            }
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => {
            Some("tfstack completions bash > ~/.local/share/bash-completion/completions/tfstack")
        }
        Shell::Zsh => Some("tfstack completions zsh > ~/.zsh/completions/_tfstack"),
        Shell::Fish => Some("tfstack completions fish > ~/.config/fish/completions/tfstack.fish"),
        Shell::PowerShell => {
            Some("tfstack completions powershell | Out-String | Invoke-Expression")
        }
        _ => None,
    }
}
