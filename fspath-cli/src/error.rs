//! CLI-specific error types with exit codes.
//!
//! Library errors are wrapped rather than flattened so the exit code can
//! depend on which library failure occurred.

use fspath::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error outside the filesystem boundary, e.g. writing stdout.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),

    /// The command ran but its check failed, e.g. `resolve --require` found
    /// nothing.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::Io(_) => 5,
                LibError::Configuration(_) | LibError::Validation { .. } => 7,
                _ => 6,
            },
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Io(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::SemanticFailure("x".into()).exit_code(), 1);
        assert_eq!(CliError::InvalidArguments("x".into()).exit_code(), 4);
        assert_eq!(CliError::Io(std::io::Error::other("x")).exit_code(), 5);
        assert_eq!(CliError::Config("x".into()).exit_code(), 7);
    }

    #[test]
    fn test_library_exit_codes() {
        let not_found = CliError::from(LibError::NotFound {
            path: "/x".to_string(),
        });
        assert_eq!(not_found.exit_code(), 6);

        let validation = CliError::from(LibError::Validation {
            field: "search_paths[0]".to_string(),
            message: "empty".to_string(),
        });
        assert_eq!(validation.exit_code(), 7);

        let io = CliError::from(LibError::Io(std::io::Error::other("disk")));
        assert_eq!(io.exit_code(), 5);
    }

    #[test]
    fn test_display_passes_library_message_through() {
        let err = CliError::from(LibError::NotFound {
            path: "/x".to_string(),
        });
        assert_eq!(err.to_string(), "path not found: /x");
    }
}
