//! Normalize command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use fspath::{FsPath, PathStyle};
use serde::Serialize;

/// Re-serialize a path without touching the filesystem.
///
/// The input is tokenized with the global `--style`; `--to` picks the
/// output style.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output style: posix, windows or native (default: --style)
    #[arg(long, value_name = "STYLE", value_parser = PathStyle::parse)]
    pub to: Option<PathStyle>,

    /// Print the parsed form as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Normalized<'a> {
    output: String,
    #[serde(flatten)]
    parsed: &'a FsPath,
}

impl NormalizeCommand {
    /// Execute the normalize command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = global.parse_path(&self.path);
        let output = path.to_style_string(self.to.unwrap_or_else(|| global.style()));

        if self.json {
            let normalized = Normalized {
                output,
                parsed: &path,
            };
            println!("{}", serde_json::to_string_pretty(&normalized)?);
        } else {
            println!("{output}");
        }
        Ok(())
    }
}
