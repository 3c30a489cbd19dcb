//! Search-path configuration.
//!
//! A resolver's search list can be described in a YAML file named
//! `fspath.yaml`, overridden from the environment, and overridden again in
//! code.
//!
//! # Configuration Precedence
//!
//! Highest first:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`FSPATH_SEARCH_PATHS`, `FSPATH_INCLUDE_CWD`,
//!    `FSPATH_CWD_POSITION`)
//! 3. The nearest `fspath.yaml` at or above the working directory, or an
//!    explicitly named file
//! 4. Built-in defaults (no extra paths, working directory searched first)
//!
//! # File Format
//!
//! ```yaml
//! search_paths:
//!   - ~/bin
//!   - /usr/local
//! include_cwd: true
//! cwd_position: first   # or: last
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use fspath::config::ConfigBuilder;
//! use fspath::{HostFs, Resolver};
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let resolver = Resolver::from_config(HostFs, &config).unwrap();
//! println!("{resolver}");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::{expand_tilde, ConfigBuilder};
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::{Config, CwdPosition};
pub use validator::ConfigValidator;
