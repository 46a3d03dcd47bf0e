//! Shell completions command

use std::io::Write;

use clap::CommandFactory;

use crate::error::{CountError, Result};

/// Map a shell name to its completion generator
pub fn parse_shell(name: &str) -> Option<clap_complete::Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Some(clap_complete::Shell::Bash),
        "elvish" => Some(clap_complete::Shell::Elvish),
        "fish" => Some(clap_complete::Shell::Fish),
        "powershell" | "pwsh" => Some(clap_complete::Shell::PowerShell),
        "zsh" => Some(clap_complete::Shell::Zsh),
        _ => None,
    }
}

/// Write shell completions for `kcount` to `out`
pub fn run(shell_name: &str, out: &mut dyn Write) -> Result<()> {
    let shell = parse_shell(shell_name).ok_or_else(|| CountError::UnknownShell {
        shell: shell_name.to_string(),
    })?;

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "kcount", out);

    Ok(())
}
