//! `completions` command

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, CompletionsArgs};

/// Name completions are registered under.
const BIN_NAME: &str = "tenframes";

/// Print the completion script for the requested shell.
pub fn run(args: &CompletionsArgs) {
    write_script(args.shell, &mut std::io::stdout());
}

/// Writes the completion script for `shell` to `out`.
pub fn write_script<W: Write>(shell: Shell, out: &mut W) {
    clap_complete::generate(shell, &mut Cli::command(), BIN_NAME, out);
}
