//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

const BIN_NAME: &str = "fspath";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    ///
    /// The script goes to stdout; installation hints go to stderr so the
    /// output can be redirected or `eval`ed directly.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            eprintln!("# Generating {} completion script", self.shell);
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# Install with:");
                eprintln!("#   {hint}");
            }
            eprintln!();
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => Some(
            "fspath completions bash > ~/.local/share/bash-completion/completions/fspath",
        ),
        Shell::Zsh => Some("fspath completions zsh > ~/.zsh/completions/_fspath"),
        Shell::Fish => Some("fspath completions fish > ~/.config/fish/completions/fspath.fish"),
        Shell::PowerShell => Some("fspath completions powershell | Out-String | Invoke-Expression"),
        _ => None,
    }
}
