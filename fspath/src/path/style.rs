//! Path style (separator and drive conventions).

use std::fmt;

use serde::{Deserialize, Serialize};

/// The separator/drive convention a path string follows.
///
/// # Examples
///
/// ```
/// use fspath::PathStyle;
///
/// assert_eq!(PathStyle::Posix.separator(), '/');
/// assert_eq!(PathStyle::Windows.separator(), '\\');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// Backslash or slash separated, absolute paths carry a drive letter.
    Windows,
    /// Slash separated, absolute paths start with `/`.
    Posix,
}

impl PathStyle {
    /// The style of the host operating system.
    #[cfg(windows)]
    pub const NATIVE: Self = Self::Windows;

    /// The style of the host operating system.
    #[cfg(not(windows))]
    pub const NATIVE: Self = Self::Posix;

    /// Characters accepted as separators when parsing.
    #[must_use]
    pub const fn separators(self) -> &'static [char] {
        match self {
            Self::Windows => &['/', '\\'],
            Self::Posix => &['/'],
        }
    }

    /// The separator written when serializing.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Windows => '\\',
            Self::Posix => '/',
        }
    }

    /// Parses a style name (`posix`/`windows`/`native`, case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::PathStyle;
    ///
    /// assert_eq!(PathStyle::parse("POSIX").unwrap(), PathStyle::Posix);
    /// assert_eq!(PathStyle::parse("native").unwrap(), PathStyle::NATIVE);
    /// assert!(PathStyle::parse("vms").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "posix" => Ok(Self::Posix),
            "windows" => Ok(Self::Windows),
            "native" => Ok(Self::NATIVE),
            _ => Err(format!("invalid path style: {s}")),
        }
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::NATIVE
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Posix => write!(f, "posix"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators() {
        assert_eq!(PathStyle::Posix.separators(), &['/']);
        assert_eq!(PathStyle::Windows.separators(), &['/', '\\']);
    }

    #[test]
    fn test_native_matches_host() {
        #[cfg(windows)]
        assert_eq!(PathStyle::NATIVE, PathStyle::Windows);
        #[cfg(not(windows))]
        assert_eq!(PathStyle::NATIVE, PathStyle::Posix);
        assert_eq!(PathStyle::default(), PathStyle::NATIVE);
    }

    #[test]
    fn test_display_and_parse_agree() {
        for style in [PathStyle::Posix, PathStyle::Windows] {
            assert_eq!(PathStyle::parse(&style.to_string()).unwrap(), style);
        }
    }
}
