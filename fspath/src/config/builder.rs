//! Layered configuration assembly.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};

/// Builds a [`Config`] from defaults, a file, the environment and
/// programmatic overrides, in increasing precedence.
///
/// After merging, the result is validated and `~` / `~/...` search paths
/// are expanded against the home directory.
///
/// # Examples
///
/// ```
/// use fspath::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         search_paths: Some(vec!["/opt/tools".into()]),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
/// assert_eq!(config.search_paths(), ["/opt/tools"]);
/// ```
#[derive(Debug, Default)]
#[must_use]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// A builder using the process working directory and environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start file discovery from `dir` instead of the process working
    /// directory.
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Load exactly this file instead of discovering one. The file must
    /// exist.
    pub fn with_file(mut self, path: &Path) -> Self {
        self.file = Some(path.to_path_buf());
        self
    }

    /// Do not read any configuration file.
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `FSPATH_*` environment variables.
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Layer `config` above every other source.
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge, validate and expand.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if an explicit file does not exist
    /// - [`Error::Configuration`] if a file is not valid YAML for the schema
    /// - [`Error::Validation`] for bad environment values or search paths
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(file) = self.file {
            let mut source = ConfigLoader::load_source(file)?;
            log::debug!("loaded configuration from '{}'", source.path.display());
            anchor_search_paths(&mut source.config, &source.path)?;
            ConfigMerger::merge_into(&mut config, &source.config);
        } else if !self.skip_files {
            let start = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            if let Some(mut source) = ConfigLoader::discover(&start)? {
                anchor_search_paths(&mut source.config, &source.path)?;
                ConfigMerger::merge_into(&mut config, &source.config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;

        if let Some(paths) = config.search_paths.as_mut() {
            for entry in paths.iter_mut() {
                *entry = expand_tilde(entry)?;
            }
        }

        Ok(config)
    }
}

// Relative entries in a file are relative to the directory holding it.
// Blank and `~` entries are left for validation and tilde expansion.
fn anchor_search_paths(config: &mut Config, file: &Path) -> Result<()> {
    let (Some(dir), Some(paths)) = (file.parent(), config.search_paths.as_mut()) else {
        return Ok(());
    };

    for entry in paths.iter_mut() {
        let path = Path::new(entry.as_str());
        let keep = entry.trim().is_empty()
            || entry.starts_with('~')
            || path.is_absolute()
            || path.has_root();
        if keep {
            continue;
        }
        *entry = dir
            .join(entry.as_str())
            .into_os_string()
            .into_string()
            .map_err(|bad| Error::Validation {
                field: "search_paths".into(),
                message: format!("not valid UTF-8: {}", bad.to_string_lossy()),
            })?;
    }
    Ok(())
}

/// Expand a leading `~` or `~/` to the home directory. Other input is
/// returned unchanged.
///
/// # Errors
///
/// Returns [`Error::Validation`] if the home directory cannot be determined
/// or is not valid UTF-8.
pub fn expand_tilde(entry: &str) -> Result<String> {
    let rest = match entry {
        "~" => "",
        _ => match entry
            .strip_prefix("~/")
            .or_else(|| entry.strip_prefix("~\\"))
        {
            Some(rest) => rest,
            None => return Ok(entry.to_string()),
        },
    };

    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "search_paths".into(),
        message: "cannot determine home directory".into(),
    })?;
    let expanded = if rest.is_empty() { home } else { home.join(rest) };

    expanded.into_os_string().into_string().map_err(|bad| Error::Validation {
        field: "search_paths".into(),
        message: format!("home directory is not valid UTF-8: {}", bad.to_string_lossy()),
    })
}
