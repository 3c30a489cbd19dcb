//! Stat command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use fspath::{FileStat, Filesystem, HostFs};
use serde::Serialize;

/// Show size and type of a path.
#[derive(Args)]
pub struct StatCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Print a JSON object instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct StatOutput {
    path: String,
    #[serde(flatten)]
    stat: FileStat,
}

impl StatCommand {
    /// Execute the stat command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = global.parse_path(&self.path);
        let stat = HostFs.stat(&path.to_native_string())?;

        if self.json {
            let output = StatOutput {
                path: global.display_path(&path),
                stat,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("path: {}", global.display_path(&path));
            println!("type: {}", kind(&stat));
            println!("size: {}", stat.size);
        }
        Ok(())
    }
}

fn kind(stat: &FileStat) -> &'static str {
    if stat.is_dir {
        "directory"
    } else if stat.is_file {
        "file"
    } else {
        "other"
    }
}
