//! Absolute command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use fspath::HostFs;

/// Print the canonical absolute form of an existing path.
#[derive(Args)]
pub struct AbsoluteCommand {
    /// Path to canonicalize
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl AbsoluteCommand {
    /// Execute the absolute command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let absolute = global.parse_path(&self.path).make_absolute(&HostFs)?;
        println!("{}", global.display_path(&absolute));
        Ok(())
    }
}
