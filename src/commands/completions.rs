//! Shell completion scripts for the directory CLI

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{Shell, generate};
use eyre::Result;

use crate::cli::Cli;

pub fn run(shell: Shell) -> Result<()> {
    let stdout = io::stdout();
    write_completions(shell, &mut stdout.lock())
}

/// Generate the script for `shell` under the binary name clap knows us by
fn write_completions(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, out);
    out.flush()?;
    Ok(())
}
