//! Utility functions for CLI operations.
//!
//! Shared by the commands: global options, configuration loading, resolver
//! construction and style-aware parsing and printing of path arguments.

use crate::error::CliError;
use fspath::{Config, ConfigBuilder, FsPath, HostFs, PathStyle, Resolver};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Search directories from `--search-path`, in order.
    pub search_paths: Vec<String>,

    /// Style override for path arguments and output.
    pub style: Option<PathStyle>,
}

impl GlobalOptions {
    /// The style used for path arguments and output, native by default.
    pub fn style(&self) -> PathStyle {
        self.style.unwrap_or(PathStyle::NATIVE)
    }

    /// Parse a path argument in the selected style.
    pub fn parse_path(&self, raw: &str) -> FsPath {
        FsPath::with_style(raw, self.style())
    }

    /// Serialize a path in the selected style.
    pub fn display_path(&self, path: &FsPath) -> String {
        path.to_style_string(self.style())
    }
}

/// Load hierarchical configuration.
///
/// Precedence, lowest to highest: built-in defaults, the configuration file
/// (`--config` or the nearest `fspath.yaml`), environment variables.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(file) = &global.config {
        builder = builder.with_file(file);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Build a resolver over the host filesystem from configuration, then
/// append every `--search-path`.
pub fn build_resolver(global: &GlobalOptions) -> Result<Resolver<HostFs>, CliError> {
    let config = load_configuration(global)?;
    let mut resolver = Resolver::from_config(HostFs, &config)?;

    for raw in &global.search_paths {
        if raw.trim().is_empty() {
            return Err(CliError::InvalidArguments(
                "--search-path must not be empty".to_string(),
            ));
        }
        resolver.append(global.parse_path(raw));
    }

    if global.verbose {
        eprintln!("{resolver}");
    }
    Ok(resolver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_defaults_to_native() {
        let global = GlobalOptions::default();
        assert_eq!(global.style(), PathStyle::NATIVE);
    }

    #[test]
    fn test_parse_and_display_follow_style() {
        let global = GlobalOptions {
            style: Some(PathStyle::Windows),
            ..GlobalOptions::default()
        };
        let path = global.parse_path("C:/Users/me");
        assert!(path.is_absolute());
        assert_eq!(global.display_path(&path), r"C:\Users\me");
    }

    #[test]
    fn test_empty_search_path_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("fspath.yaml");
        std::fs::write(&config, "include_cwd: false\n").unwrap();

        let global = GlobalOptions {
            config: Some(config),
            search_paths: vec!["  ".to_string()],
            ..GlobalOptions::default()
        };
        let err = build_resolver(&global).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_search_paths_appended_after_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("fspath.yaml");
        std::fs::write(&config, "search_paths: [/etc]\ninclude_cwd: false\n").unwrap();

        let global = GlobalOptions {
            config: Some(config),
            search_paths: vec!["/opt".to_string()],
            style: Some(PathStyle::Posix),
            ..GlobalOptions::default()
        };
        let resolver = build_resolver(&global).unwrap();
        let paths: Vec<String> = resolver
            .iter()
            .map(|p| p.to_style_string(PathStyle::Posix))
            .collect();
        assert_eq!(paths, ["/etc", "/opt"]);
    }
}
