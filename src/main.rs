mod cli;
mod convert_cmd;
mod distance_cmd;
mod logging;
mod solve_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Convert(args) => convert_cmd::run(args),
        Command::Distance(args) => distance_cmd::run(args),
        Command::Solve(args) => solve_cmd::run(args),
    }
}
