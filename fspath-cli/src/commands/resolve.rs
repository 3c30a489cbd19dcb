//! Resolve command implementation.

use crate::error::CliError;
use crate::utils::{build_resolver, GlobalOptions};
use clap::Args;
use fspath::PathStyle;

/// Find the first search directory containing a relative path.
///
/// Without `--require` a miss prints the target unchanged and succeeds, the
/// same fallback the library resolver uses.
///
/// Configured bases and the working directory are native paths, so only the
/// native `--style` is accepted.
#[derive(Args)]
pub struct ResolveCommand {
    /// Relative path to look for
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Print every match, in search order
    #[arg(long)]
    pub all: bool,

    /// Fail with exit code 1 when nothing matches
    #[arg(long)]
    pub require: bool,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if global.style() != PathStyle::NATIVE {
            return Err(CliError::InvalidArguments(format!(
                "resolve only accepts --style {}",
                PathStyle::NATIVE
            )));
        }

        let resolver = build_resolver(global)?;
        let target = global.parse_path(&self.target);

        if target.is_absolute() {
            return Err(CliError::InvalidArguments(format!(
                "resolve target must be relative: {}",
                self.target
            )));
        }

        if self.all {
            let hits = resolver.resolve_all(&target)?;
            if hits.is_empty() && self.require {
                return Err(not_found(&self.target));
            }
            for hit in &hits {
                println!("{}", global.display_path(hit));
            }
            return Ok(());
        }

        let resolved = resolver.resolve(&target)?;
        if self.require && !resolved.file_exists(resolver.filesystem()) {
            return Err(not_found(&self.target));
        }
        println!("{}", global.display_path(&resolved));
        Ok(())
    }
}

fn not_found(target: &str) -> CliError {
    CliError::SemanticFailure(format!("'{target}' not found in any search path"))
}
