//! Configuration file discovery and loading.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name searched for by [`ConfigLoader::discover`].
pub const CONFIG_FILE_NAME: &str = "fspath.yaml";

/// A configuration file and its parsed contents.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Where the file was read from.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Finds and parses configuration files.
///
/// # Examples
///
/// ```no_run
/// use fspath::config::ConfigLoader;
/// use std::path::Path;
///
/// if let Some(source) = ConfigLoader::discover(Path::new(".")).unwrap() {
///     println!("using {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Look for [`CONFIG_FILE_NAME`] in `start_dir` and then each parent in
    /// turn. The nearest file wins; the walk stops there.
    ///
    /// # Errors
    ///
    /// Returns an error if the file found cannot be read or parsed.
    pub fn discover(start_dir: &Path) -> Result<Option<ConfigSource>> {
        for dir in start_dir.ancestors() {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                log::debug!("found configuration at '{}'", candidate.display());
                return Self::load_source(candidate).map(Some);
            }
        }
        log::debug!(
            "no {CONFIG_FILE_NAME} at or above '{}'",
            start_dir.display()
        );
        Ok(None)
    }

    /// Load an explicitly named file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_source(path: PathBuf) -> Result<ConfigSource> {
        let config = Self::load_file(&path)?;
        Ok(ConfigSource { path, config })
    }

    /// Read and parse a YAML configuration file.
    ///
    /// An empty file is the default configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] or [`Error::Io`] if the file cannot be read
    /// - [`Error::Configuration`] if the YAML is invalid
    pub fn load_file(path: &Path) -> Result<Config> {
        let display = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| Error::from_io(e, &display))?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(&contents)?)
    }
}
