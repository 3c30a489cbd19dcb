//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Checks a merged configuration before it seeds a resolver.
///
/// # Examples
///
/// ```
/// use fspath::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { search_paths: Some(vec![String::new()]), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate every search path entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an empty or blank entry, an entry
    /// containing a NUL byte, or a `~user` entry.
    pub fn validate(config: &Config) -> Result<()> {
        for (index, entry) in config.search_paths().iter().enumerate() {
            Self::validate_search_path(index, entry)?;
        }
        Ok(())
    }

    fn validate_search_path(index: usize, entry: &str) -> Result<()> {
        let field = || format!("search_paths[{index}]");

        if entry.trim().is_empty() {
            return Err(Error::Validation {
                field: field(),
                message: "search path cannot be empty".into(),
            });
        }
        if entry.contains('\0') {
            return Err(Error::Validation {
                field: field(),
                message: "search path cannot contain NUL".into(),
            });
        }
        if entry.starts_with('~') && entry != "~" && !entry.starts_with("~/") && !entry.starts_with("~\\") {
            return Err(Error::Validation {
                field: field(),
                message: format!("'{entry}': ~user syntax is not supported; use ~ or ~/path"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_paths(paths: &[&str]) -> Config {
        Config {
            search_paths: Some(paths.iter().map(|p| (*p).to_string()).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_paths() {
        ConfigValidator::validate(&with_paths(&["/usr/local", "relative/dir", "~", "~/bin"]))
            .unwrap();
    }

    #[test]
    fn test_blank_entry_reports_index() {
        let err = ConfigValidator::validate(&with_paths(&["/ok", "  "])).unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "search_paths[1]"));
    }

    #[test]
    fn test_nul_rejected() {
        assert!(ConfigValidator::validate(&with_paths(&["/a\0b"])).is_err());
    }

    #[test]
    fn test_tilde_user_rejected() {
        assert!(ConfigValidator::validate(&with_paths(&["~alice/bin"])).is_err());
    }
}
