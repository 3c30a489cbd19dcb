//! Configuration file schema.

use serde::{Deserialize, Serialize};

/// Where the working directory goes in the resolver's search list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CwdPosition {
    /// Searched before every configured path.
    #[default]
    First,
    /// Searched after every configured path.
    Last,
}

impl CwdPosition {
    /// Parse `first` or `last`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns a message naming the input otherwise.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            _ => Err(format!("invalid cwd position: {s}")),
        }
    }
}

/// Resolver configuration as read from `fspath.yaml`.
///
/// Every field is optional so that sources can be layered; the accessor
/// methods apply the built-in defaults.
///
/// # Examples
///
/// ```
/// use fspath::config::{Config, CwdPosition};
///
/// let config: Config = serde_yaml::from_str(
///     "search_paths: [/opt/tools, ~/bin]\ncwd_position: last\n",
/// ).unwrap();
/// assert_eq!(config.search_paths(), ["/opt/tools", "~/bin"]);
/// assert!(config.include_cwd());
/// assert_eq!(config.cwd_position(), CwdPosition::Last);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Ordered directories to search, before the working directory is placed.
    ///
    /// Relative entries read from a file are anchored to that file's
    /// directory by [`ConfigBuilder`](crate::config::ConfigBuilder); entries
    /// from the environment or programmatic overrides stay relative to the
    /// working directory.
    pub search_paths: Option<Vec<String>>,

    /// Whether the working directory is part of the search list.
    pub include_cwd: Option<bool>,

    /// Where the working directory is placed when included.
    pub cwd_position: Option<CwdPosition>,
}

impl Config {
    /// Configured search paths, empty when unset.
    #[must_use]
    pub fn search_paths(&self) -> &[String] {
        self.search_paths.as_deref().unwrap_or_default()
    }

    /// Defaults to `true`.
    #[must_use]
    pub fn include_cwd(&self) -> bool {
        self.include_cwd.unwrap_or(true)
    }

    /// Defaults to [`CwdPosition::First`].
    #[must_use]
    pub fn cwd_position(&self) -> CwdPosition {
        self.cwd_position.unwrap_or_default()
    }
}
