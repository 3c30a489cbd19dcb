//! CLI structure and command definitions.
//!
//! Global options apply to every subcommand; `--style` controls how path
//! arguments are tokenized and how results are printed.

use crate::commands::{
    AbsoluteCommand, CompletionsCommand, LsCommand, MkdirCommand, NormalizeCommand,
    ResolveCommand, RmCommand, StatCommand, TruncateCommand,
};
use clap::{Parser, Subcommand};
use fspath::PathStyle;
use std::path::PathBuf;

/// Inspect paths, resolve files across search directories, and walk trees.
#[derive(Parser)]
#[command(name = "fspath")]
#[command(
    version,
    about = "Cross-platform path inspection and search-path resolution",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file instead of searching for fspath.yaml
    #[arg(long, value_name = "FILE", global = true, env = "FSPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Extra search directory, searched after configured ones (repeatable)
    #[arg(long = "search-path", value_name = "DIR", global = true)]
    pub search_paths: Vec<String>,

    /// Path style for arguments and output: posix, windows or native
    #[arg(long, value_name = "STYLE", global = true, value_parser = PathStyle::parse)]
    pub style: Option<PathStyle>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Find the first search directory containing a relative path
    Resolve(ResolveCommand),

    /// Show size and type of a path
    Stat(StatCommand),

    /// List a directory
    Ls(LsCommand),

    /// Create a directory
    Mkdir(MkdirCommand),

    /// Remove a file or directory
    Rm(RmCommand),

    /// Set the size of an existing file
    Truncate(TruncateCommand),

    /// Print the canonical absolute form of an existing path
    Absolute(AbsoluteCommand),

    /// Re-serialize a path without touching the filesystem
    Normalize(NormalizeCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
