//! Mkdir command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use fspath::{Filesystem, HostFs};

/// Create a directory.
#[derive(Args)]
pub struct MkdirCommand {
    /// Directory to create
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Create missing parents; an existing directory is not an error
    #[arg(short, long)]
    pub parents: bool,
}

impl MkdirCommand {
    /// Execute the mkdir command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let native = global.parse_path(&self.path).to_native_string();
        if self.parents {
            HostFs.create_dir_all(&native)?;
        } else {
            HostFs.create_dir(&native)?;
        }

        if !global.quiet {
            eprintln!("Created {native}");
        }
        Ok(())
    }
}
