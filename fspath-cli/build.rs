//! Build script for fspath-cli.
//!
//! Generates the `fspath.1` man page into OUT_DIR with clap_mangen. Build
//! scripts cannot depend on the crate being built, so the command tree is
//! declared again here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Keep synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("fspath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Cross-platform path inspection and search-path resolution")
        .long_about(
            "Inspect paths, resolve relative paths across search directories, and walk directory trees",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file instead of searching for fspath.yaml")
                .value_name("FILE")
                .global(true)
                .env("FSPATH_CONFIG"),
        )
        .arg(
            Arg::new("search-path")
                .long("search-path")
                .help("Extra search directory, searched after configured ones (repeatable)")
                .value_name("DIR")
                .global(true)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .help("Path style for arguments and output: posix, windows or native")
                .value_name("STYLE")
                .global(true),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Find the first search directory containing a relative path")
                .long_about("Print the first existing search-path/TARGET, or TARGET itself"),
            Command::new("stat")
                .about("Show size and type of a path")
                .long_about("Display the size and whether a path is a file or directory"),
            Command::new("ls")
                .about("List a directory")
                .long_about("List a directory, optionally recursively with parents first"),
            Command::new("mkdir")
                .about("Create a directory")
                .long_about("Create a directory, optionally with missing parents"),
            Command::new("rm")
                .about("Remove a file or directory")
                .long_about("Remove a file, an empty directory, or a whole tree"),
            Command::new("truncate")
                .about("Set the size of an existing file")
                .long_about("Shrink or zero-extend an existing file to an exact length"),
            Command::new("absolute")
                .about("Print the canonical absolute form of an existing path")
                .long_about("Canonicalize a path through the host filesystem"),
            Command::new("normalize")
                .about("Re-serialize a path without touching the filesystem")
                .long_about("Tokenize a path and print it in the requested style"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").map_err(std::io::Error::other)?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("fspath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
