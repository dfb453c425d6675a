//! Tabledoc CLI - Command-line interface for tabledoc.

use clap::Parser;

use tabledoc_cli::cli::{Cli, Command};
use tabledoc_cli::commands;
use tabledoc_cli::error::CliResult;
use tabledoc_cli::output;

fn main() {
    // Run the CLI and handle errors
    if let Err(e) = run() {
        output::newline();
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Run the appropriate command
    match cli.command {
        Command::Generate(args) => commands::generate::run(args),
        Command::Version => commands::version::run(),
    }
}
