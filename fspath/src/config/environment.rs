//! Environment variable overrides.

use crate::config::schema::{Config, CwdPosition};
use crate::error::{Error, Result};
use std::env;
use std::ffi::OsString;

/// Replaces the configured search paths; entries are split with the
/// platform's path-list separator (`:` on Unix, `;` on Windows).
pub const SEARCH_PATHS_ENV: &str = "FSPATH_SEARCH_PATHS";

/// Overrides `include_cwd`.
pub const INCLUDE_CWD_ENV: &str = "FSPATH_INCLUDE_CWD";

/// Overrides `cwd_position`.
pub const CWD_POSITION_ENV: &str = "FSPATH_CWD_POSITION";

/// Applies `FSPATH_*` variables on top of file configuration.
///
/// # Examples
///
/// ```no_run
/// use fspath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the variable if a value cannot
    /// be parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_from(config, |key| env::var_os(key))
    }

    /// Apply overrides read through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the variable if a value cannot
    /// be parsed.
    pub fn apply_from<F>(config: &mut Config, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        if let Some(raw) = lookup(SEARCH_PATHS_ENV) {
            config.search_paths = Some(Self::parse_search_paths(&raw)?);
        }

        if let Some(raw) = lookup(INCLUDE_CWD_ENV) {
            let value = Self::utf8(INCLUDE_CWD_ENV, raw)?;
            config.include_cwd = Some(Self::parse_bool(INCLUDE_CWD_ENV, &value)?);
        }

        if let Some(raw) = lookup(CWD_POSITION_ENV) {
            let value = Self::utf8(CWD_POSITION_ENV, raw)?;
            config.cwd_position =
                Some(CwdPosition::parse(&value).map_err(|message| Error::Validation {
                    field: CWD_POSITION_ENV.into(),
                    message,
                })?);
        }

        Ok(())
    }

    // Empty entries are dropped rather than read as the working directory.
    fn parse_search_paths(raw: &OsString) -> Result<Vec<String>> {
        env::split_paths(raw)
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| {
                p.into_os_string()
                    .into_string()
                    .map_err(|bad| Error::Validation {
                        field: SEARCH_PATHS_ENV.into(),
                        message: format!("not valid UTF-8: {}", bad.to_string_lossy()),
                    })
            })
            .collect()
    }

    fn utf8(field: &str, raw: OsString) -> Result<String> {
        raw.into_string().map_err(|bad| Error::Validation {
            field: field.into(),
            message: format!("not valid UTF-8: {}", bad.to_string_lossy()),
        })
    }

    /// Accepts true/1/yes/on and false/0/no/off, ignoring case.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let map: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), OsString::from(v)))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_parse_bool_variants() {
        for s in ["true", "TRUE", "1", "yes", "On"] {
            assert!(EnvironmentConfig::parse_bool("t", s).unwrap());
        }
        for s in ["false", "0", "NO", "off"] {
            assert!(!EnvironmentConfig::parse_bool("t", s).unwrap());
        }
        assert!(EnvironmentConfig::parse_bool("t", "maybe").is_err());
    }

    #[test]
    fn test_no_variables_leaves_config() {
        let mut config = Config {
            include_cwd: Some(false),
            ..Default::default()
        };
        EnvironmentConfig::apply_from(&mut config, lookup(&[])).unwrap();
        assert_eq!(config.include_cwd, Some(false));
        assert_eq!(config.search_paths, None);
    }

    #[test]
    fn test_search_paths_split() {
        let joined = env::join_paths(["/opt/a", "/opt/b"]).unwrap();
        let joined = joined.to_str().unwrap().to_string();

        let mut config = Config::default();
        EnvironmentConfig::apply_from(&mut config, lookup(&[(SEARCH_PATHS_ENV, &joined)]))
            .unwrap();
        assert_eq!(config.search_paths(), ["/opt/a", "/opt/b"]);
    }

    #[test]
    fn test_search_paths_empty_value_clears() {
        let mut config = Config {
            search_paths: Some(vec!["/from/file".into()]),
            ..Default::default()
        };
        EnvironmentConfig::apply_from(&mut config, lookup(&[(SEARCH_PATHS_ENV, "")])).unwrap();
        assert_eq!(config.search_paths, Some(Vec::new()));
    }

    #[test]
    fn test_include_cwd_and_position() {
        let mut config = Config::default();
        EnvironmentConfig::apply_from(
            &mut config,
            lookup(&[(INCLUDE_CWD_ENV, "no"), (CWD_POSITION_ENV, "last")]),
        )
        .unwrap();
        assert!(!config.include_cwd());
        assert_eq!(config.cwd_position(), CwdPosition::Last);
    }

    #[test]
    fn test_invalid_values_name_the_variable() {
        let mut config = Config::default();
        let err = EnvironmentConfig::apply_from(&mut config, lookup(&[(INCLUDE_CWD_ENV, "perhaps")]))
            .unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == INCLUDE_CWD_ENV));

        let err =
            EnvironmentConfig::apply_from(&mut config, lookup(&[(CWD_POSITION_ENV, "middle")]))
                .unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == CWD_POSITION_ENV));
    }

    #[test]
    #[serial]
    fn test_apply_overrides_reads_process_env() {
        let saved = env::var_os(INCLUDE_CWD_ENV);
        env::set_var(INCLUDE_CWD_ENV, "0");

        let mut config = Config::default();
        let result = EnvironmentConfig::apply_overrides(&mut config);

        match saved {
            Some(v) => env::set_var(INCLUDE_CWD_ENV, v),
            None => env::remove_var(INCLUDE_CWD_ENV),
        }
        result.unwrap();
        assert_eq!(config.include_cwd, Some(false));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Boolean parsing ignores case
            #[test]
            fn bool_parsing_case_insensitive(upper in any::<bool>(), value in any::<bool>()) {
                let s = value.to_string();
                let s = if upper { s.to_uppercase() } else { s };
                prop_assert_eq!(EnvironmentConfig::parse_bool("t", &s).unwrap(), value);
            }

            /// Anything outside the accepted words fails
            #[test]
            fn bool_parsing_rejects_other_words(s in "[a-z]{2,8}") {
                prop_assume!(!["true", "false", "yes", "no", "on", "off"].contains(&s.as_str()));
                prop_assert!(EnvironmentConfig::parse_bool("t", &s).is_err());
            }
        }
    }
}
