//! The cross-platform path value.
//!
//! An [`FsPath`] is a parsed path: an ordered list of non-empty segments, a
//! [`PathStyle`] that fixed how it was tokenized, and an absolute flag. It
//! never touches the filesystem on its own; the I/O queries take a
//! [`Filesystem`](crate::fs::Filesystem) and pass it the native string.
//!
//! # Styles
//!
//! - **Posix**: `/` separates segments; a leading `/` makes the path absolute.
//! - **Windows**: `/` and `\` both separate; a drive such as `C:` makes the
//!   path absolute. The long-path marker `\\?\` is stripped when parsing and
//!   restored on output once the path outgrows [`MAX_PATH_LEGACY`].
//!
//! # Examples
//!
//! ```
//! use fspath::{FsPath, PathStyle};
//!
//! let posix = FsPath::with_style("/usr//local/bin/", PathStyle::Posix);
//! assert_eq!(posix.segments(), ["usr", "local", "bin"]);
//! assert_eq!(posix.to_style_string(PathStyle::Posix), "/usr/local/bin");
//!
//! let windows = FsPath::with_style(r"C:\Program Files\App", PathStyle::Windows);
//! assert!(windows.is_absolute());
//! assert_eq!(windows.filename(), "App");
//!
//! let joined = (&posix / "tool").unwrap();
//! assert_eq!(joined.to_style_string(PathStyle::Posix), "/usr/local/bin/tool");
//! ```

mod style;
pub mod tokenize;
mod value;
mod wide;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use style::PathStyle;
pub use value::{FsPath, LONG_PATH_PREFIX, MAX_PATH_LEGACY};
