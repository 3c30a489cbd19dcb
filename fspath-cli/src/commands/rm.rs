//! Rm command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use fspath::{Error as LibError, Filesystem, HostFs};
use std::fs;

/// Remove a file or directory.
///
/// Directories must be empty unless `--recursive` is given. A symlink is
/// removed itself, never its target.
#[derive(Args)]
pub struct RmCommand {
    /// Path to remove
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Remove a directory and everything below it
    #[arg(short, long)]
    pub recursive: bool,
}

impl RmCommand {
    /// Execute the rm command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = global.parse_path(&self.path);
        let native = path.to_native_string();

        let meta = fs::symlink_metadata(&native).map_err(|e| LibError::from_io(e, &native))?;

        if meta.is_dir() {
            if self.recursive {
                HostFs.remove_dir_all(&native)?;
            } else {
                HostFs.remove_dir(&native)?;
            }
        } else {
            HostFs.remove_file(&native)?;
        }

        if !global.quiet {
            eprintln!("Removed {native}");
        }
        Ok(())
    }
}
