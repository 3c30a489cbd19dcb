//! Main entry point for the fspath CLI.
//!
//! Commands:
//! - `resolve`: Find a relative path in the search directories
//! - `stat`, `ls`: Inspect files and directories
//! - `mkdir`, `rm`, `truncate`: Modify the filesystem
//! - `absolute`, `normalize`: Transform path strings
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = fspath::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: logging unavailable: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        search_paths: cli.search_paths,
        style: cli.style,
    };

    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Stat(cmd) => cmd.execute(&global),
        cli::Command::Ls(cmd) => cmd.execute(&global),
        cli::Command::Mkdir(cmd) => cmd.execute(&global),
        cli::Command::Rm(cmd) => cmd.execute(&global),
        cli::Command::Truncate(cmd) => cmd.execute(&global),
        cli::Command::Absolute(cmd) => cmd.execute(&global),
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
