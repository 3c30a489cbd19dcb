//! CLI command implementations.
//!
//! - `resolve`: Find a relative path in the search directories
//! - `stat`: Show size and type of a path
//! - `ls`: List a directory, optionally recursively
//! - `mkdir`: Create a directory
//! - `rm`: Remove a file or directory
//! - `truncate`: Set the size of a file
//! - `absolute`: Canonicalize an existing path
//! - `normalize`: Re-serialize a path in another style
//! - `completions`: Generate shell completion scripts

pub mod absolute;
pub mod completions;
pub mod ls;
pub mod mkdir;
pub mod normalize;
pub mod resolve;
pub mod rm;
pub mod stat;
pub mod truncate;

pub use absolute::AbsoluteCommand;
pub use completions::CompletionsCommand;
pub use ls::LsCommand;
pub use mkdir::MkdirCommand;
pub use normalize::NormalizeCommand;
pub use resolve::ResolveCommand;
pub use rm::RmCommand;
pub use stat::StatCommand;
pub use truncate::TruncateCommand;
