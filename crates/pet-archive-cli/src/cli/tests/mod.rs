//! CLI parse and render tests.

use super::{Cli, CliCommand, PetsFormat};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}
