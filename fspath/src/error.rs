//! Error types for the fspath library.
//!
//! This module provides the error hierarchy for path manipulation, the
//! filesystem capability boundary, and configuration loading, using
//! `thiserror` for ergonomic error handling.

use std::io;

use thiserror::Error;

/// Result type alias for operations that may fail with an fspath error.
///
/// # Examples
///
/// ```
/// use fspath::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(4096)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the fspath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A structural misuse of the path API, such as joining an absolute
    /// path onto another path or mixing path styles.
    #[error("invalid operation in {operation}: {reason}")]
    InvalidOperation {
        /// The operation that was attempted.
        operation: &'static str,
        /// Why the operation is not allowed.
        reason: String,
    },

    /// A path does not exist.
    #[error("path not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: String,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The path that could not be accessed.
        path: String,
    },

    /// The target of a create operation already exists.
    #[error("path already exists: {path}")]
    AlreadyExists {
        /// The path that already exists.
        path: String,
    },

    /// A directory operation was applied to something that is not a directory.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The offending path.
        path: String,
    },

    /// A non-recursive directory removal found remaining entries.
    #[error("directory not empty: {path}")]
    DirectoryNotEmpty {
        /// The directory that still has entries.
        path: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field or input that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Map an OS error for `path` onto the library taxonomy.
    ///
    /// `NotFound`, `PermissionDenied` and `AlreadyExists` get their own
    /// variants; everything else is carried as [`Error::Io`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Error;
    /// use std::io;
    ///
    /// let err = Error::from_io(io::Error::from(io::ErrorKind::NotFound), "/missing");
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn from_io(err: io::Error, path: &str) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_string(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_string(),
            },
            io::ErrorKind::AlreadyExists => Self::AlreadyExists {
                path: path.to_string(),
            },
            _ => Self::Io(err),
        }
    }

    pub(crate) fn invalid_operation(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidOperation {
            operation,
            reason: reason.into(),
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Error;
    ///
    /// let err = Error::NotFound { path: "/nonexistent".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Io(e) => e.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Check if error is a structural misuse of the path API.
    #[must_use]
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation { .. })
    }
}
