//! Ls command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use fspath::walk::{self, WalkControl};
use fspath::HostFs;
use serde::Serialize;

/// List a directory.
#[derive(Args)]
pub struct LsCommand {
    /// Directory to list (default: current directory)
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: String,

    /// Descend into subdirectories, parents before children
    #[arg(short, long)]
    pub recursive: bool,

    /// Stop descending below this depth (implies --recursive)
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Print a JSON array instead of one path per line
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct LsEntry {
    path: String,
    is_dir: bool,
    depth: usize,
}

impl LsCommand {
    /// Execute the ls command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let dir = global.parse_path(&self.dir);
        let max_depth = match (self.max_depth, self.recursive) {
            (Some(0), _) => {
                return Err(CliError::InvalidArguments(
                    "--max-depth must be at least 1".to_string(),
                ))
            }
            (Some(n), _) => n,
            (None, true) => usize::MAX,
            (None, false) => 1,
        };

        let mut entries = Vec::new();
        walk::walk(&HostFs, &dir, |entry| {
            entries.push(LsEntry {
                path: global.display_path(&entry.path),
                is_dir: entry.is_dir,
                depth: entry.depth,
            });
            if entry.depth >= max_depth {
                WalkControl::SkipChildren
            } else {
                WalkControl::Continue
            }
        })?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            for entry in &entries {
                println!("{}", entry.path);
            }
        }
        Ok(())
    }
}
