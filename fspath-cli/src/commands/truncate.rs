//! Truncate command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use fspath::{Filesystem, HostFs};

/// Set the size of an existing file, zero-filling when it grows.
#[derive(Args)]
pub struct TruncateCommand {
    /// File to resize
    #[arg(value_name = "PATH")]
    pub path: String,

    /// New size in bytes
    #[arg(value_name = "LEN")]
    pub len: u64,
}

impl TruncateCommand {
    /// Execute the truncate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let native = global.parse_path(&self.path).to_native_string();
        HostFs.truncate(&native, self.len)?;
        Ok(())
    }
}
