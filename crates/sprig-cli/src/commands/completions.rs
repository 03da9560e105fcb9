//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};

pub fn execute(args: CompletionsArgs) -> crate::error::CliResult<()> {
    let mut cmd = Cli::command();
    let out = &mut std::io::stdout();

    match args.shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, "sprig", out),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, "sprig", out),
        Shell::Fish => generate(shells::Fish, &mut cmd, "sprig", out),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, "sprig", out),
        Shell::Elvish => generate(shells::Elvish, &mut cmd, "sprig", out),
    };

    Ok(())
}
