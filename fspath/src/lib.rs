#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # fspath
//!
//! Cross-platform path values, a pluggable filesystem boundary, and a
//! search-path resolver.
//!
//! Paths are parsed once into segments under an explicit [`PathStyle`] and
//! serialized back on demand, so posix and windows paths can be handled on
//! any host. All host I/O goes through the [`Filesystem`] trait, with
//! [`HostFs`] for the real operating system and [`MemoryFs`] for tests.
//!
//! ## Core Types
//!
//! - [`FsPath`] and [`PathStyle`]: the path value and its tokenization rules
//! - [`Filesystem`], [`HostFs`], [`MemoryFs`]: the capability boundary
//! - [`Resolver`]: first-match lookup of a relative path across directories
//! - [`walk`]: one-level, recursive and callback-driven directory listing
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use fspath::{FsPath, MemoryFs, PathStyle, Resolver};
//!
//! let path = FsPath::with_style(r"\\?\C:\very\long\path", PathStyle::Windows);
//! assert_eq!(path.segments(), ["C:", "very", "long", "path"]);
//! assert_eq!(path.to_style_string(PathStyle::Windows), r"C:\very\long\path");
//!
//! let fs = MemoryFs::new();
//! fs.insert_file("/opt/tool/bin/run", 0).unwrap();
//! let resolver = Resolver::with_search_paths(fs, [FsPath::new("/usr"), FsPath::new("/opt/tool")]);
//! assert_eq!(
//!     resolver.resolve(&FsPath::new("bin/run")).unwrap(),
//!     FsPath::new("/opt/tool/bin/run")
//! );
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod path;
pub mod resolver;
pub mod walk;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use fs::{FileStat, Filesystem, HostFs, MemoryFs};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{FsPath, PathStyle};
pub use resolver::Resolver;
