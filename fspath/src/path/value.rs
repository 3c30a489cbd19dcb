//! The path value type.

use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Div;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::fs::Filesystem;
use crate::path::style::PathStyle;
use crate::path::tokenize::tokenize;

/// Prefix that lets Windows APIs accept paths longer than [`MAX_PATH_LEGACY`].
pub const LONG_PATH_PREFIX: &str = r"\\?\";

/// The legacy Windows `MAX_PATH`, counting one terminator per segment.
pub const MAX_PATH_LEGACY: usize = 260;

/// A filesystem path held as an ordered list of segments.
///
/// The raw string is parsed once, when the path is constructed or [`set`];
/// separators are never stored. The style and the absolute flag are fixed at
/// parse time and carried unchanged into derived paths.
///
/// Equality and hashing look at the segments only: `/a/b` and `a/b` compare
/// equal, as do the same segments under different styles.
///
/// # Examples
///
/// ```
/// use fspath::{FsPath, PathStyle};
///
/// let path = FsPath::with_style("/usr//local/bin/", PathStyle::Posix);
/// assert!(path.is_absolute());
/// assert_eq!(path.segments(), ["usr", "local", "bin"]);
/// assert_eq!(path.to_style_string(PathStyle::Posix), "/usr/local/bin");
///
/// let drive = FsPath::with_style(r"C:\Users\me", PathStyle::Windows);
/// assert!(drive.is_absolute());
/// assert_eq!(drive.to_style_string(PathStyle::Windows), r"C:\Users\me");
/// ```
///
/// [`set`]: FsPath::set
#[derive(Debug, Clone, Serialize)]
pub struct FsPath {
    segments: Vec<String>,
    style: PathStyle,
    absolute: bool,
}

impl FsPath {
    /// Parse `raw` using the host's native style.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self::with_style(raw, PathStyle::NATIVE)
    }

    /// Parse `raw` using an explicit style.
    #[must_use]
    pub fn with_style(raw: &str, style: PathStyle) -> Self {
        let mut path = Self::empty(style);
        path.set(raw, style);
        path
    }

    /// An empty relative path.
    #[must_use]
    pub const fn empty(style: PathStyle) -> Self {
        Self {
            segments: Vec::new(),
            style,
            absolute: false,
        }
    }

    /// Re-parse this path from `raw`, replacing segments, style and the
    /// absolute flag together.
    ///
    /// Windows-style input has a leading [`LONG_PATH_PREFIX`] removed before
    /// tokenizing; it is put back by [`to_style_string`] when needed.
    ///
    /// [`to_style_string`]: FsPath::to_style_string
    pub fn set(&mut self, raw: &str, style: PathStyle) {
        let (body, absolute) = match style {
            PathStyle::Windows => {
                let body = raw.strip_prefix(LONG_PATH_PREFIX).unwrap_or(raw);
                (body, has_drive_prefix(body))
            }
            PathStyle::Posix => (raw, raw.starts_with('/')),
        };

        self.segments = tokenize(body, style.separators())
            .map(str::to_string)
            .collect();
        self.style = style;
        self.absolute = absolute;
    }

    /// Serialize using the separator of `style`.
    ///
    /// The leading marker of an absolute path follows the path's own style:
    /// `/` for posix paths, and for windows paths the long-path prefix when
    /// the legacy length exceeds [`MAX_PATH_LEGACY`].
    #[must_use]
    pub fn to_style_string(&self, style: PathStyle) -> String {
        let mut out = String::new();

        if self.absolute {
            match self.style {
                PathStyle::Posix => out.push('/'),
                PathStyle::Windows => {
                    if self.legacy_length() > MAX_PATH_LEGACY {
                        out.push_str(LONG_PATH_PREFIX);
                    }
                }
            }
        }

        let separator = style.separator();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push(separator);
            }
            out.push_str(segment);
        }
        out
    }

    /// Serialize using the host's native separator.
    #[must_use]
    pub fn to_native_string(&self) -> String {
        self.to_style_string(PathStyle::NATIVE)
    }

    // UTF-8 bytes plus a separator or terminator for every component.
    fn legacy_length(&self) -> usize {
        self.segments.iter().map(|s| s.len() + 1).sum()
    }

    /// The parsed segments, root first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The style this path was parsed with.
    #[must_use]
    pub const fn style(&self) -> PathStyle {
        self.style
    }

    /// Whether the path was absolute when parsed.
    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The last segment, or `""` for an empty path.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::FsPath;
    ///
    /// assert_eq!(FsPath::new("docs/readme.md").filename(), "readme.md");
    /// assert_eq!(FsPath::new("").filename(), "");
    /// ```
    #[must_use]
    pub fn filename(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// The part of the filename after its last `.`, or `""` if it has none.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::FsPath;
    ///
    /// assert_eq!(FsPath::new("archive.tar.gz").extension(), "gz");
    /// assert_eq!(FsPath::new("noext").extension(), "");
    /// ```
    #[must_use]
    pub fn extension(&self) -> &str {
        self.filename()
            .rsplit_once('.')
            .map_or("", |(_, ext)| ext)
    }

    /// The path without its last segment.
    ///
    /// An empty relative path yields `..`; an empty absolute path yields
    /// itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::FsPath;
    ///
    /// assert!(FsPath::new("a").parent_path().is_empty());
    /// assert_eq!(FsPath::new("").parent_path().segments(), [".."]);
    /// ```
    #[must_use]
    pub fn parent_path(&self) -> Self {
        let mut parent = Self::empty(self.style);
        parent.absolute = self.absolute;

        if let Some((_, init)) = self.segments.split_last() {
            parent.segments = init.to_vec();
        } else if !self.absolute {
            parent.segments.push("..".to_string());
        }
        parent
    }

    /// Append the segments of `other` to a copy of this path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] if `other` is absolute or if the
    /// two paths have different styles.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::{FsPath, PathStyle};
    ///
    /// let base = FsPath::with_style("/usr/local", PathStyle::Posix);
    /// let tool = FsPath::with_style("bin/tool", PathStyle::Posix);
    /// let joined = base.join(&tool).unwrap();
    /// assert_eq!(joined.to_style_string(PathStyle::Posix), "/usr/local/bin/tool");
    ///
    /// let root = FsPath::with_style("/b", PathStyle::Posix);
    /// assert!(base.join(&root).is_err());
    /// ```
    pub fn join(&self, other: &Self) -> Result<Self> {
        if other.absolute {
            return Err(Error::invalid_operation(
                "join",
                format!("expected a relative path, got '{other}'"),
            ));
        }
        if self.style != other.style {
            return Err(Error::invalid_operation(
                "join",
                format!(
                    "expected a {} path, got a {} path",
                    self.style, other.style
                ),
            ));
        }

        let mut joined = self.clone();
        joined.segments.extend(other.segments.iter().cloned());
        Ok(joined)
    }

    /// Whether anything exists at this path.
    ///
    /// Never fails: a stat error of any kind reads as `false`.
    pub fn file_exists(&self, fs: &(impl Filesystem + ?Sized)) -> bool {
        fs.exists(&self.to_native_string())
    }

    /// Size in bytes of the entry at this path.
    ///
    /// # Errors
    ///
    /// Returns the stat failure, e.g. [`Error::NotFound`].
    pub fn file_size(&self, fs: &(impl Filesystem + ?Sized)) -> Result<u64> {
        Ok(fs.stat(&self.to_native_string())?.size)
    }

    /// Whether this path names a directory; `false` when stat fails.
    pub fn is_directory(&self, fs: &(impl Filesystem + ?Sized)) -> bool {
        fs.stat(&self.to_native_string())
            .is_ok_and(|stat| stat.is_dir)
    }

    /// Whether this path names a regular file; `false` when stat fails.
    pub fn is_file(&self, fs: &(impl Filesystem + ?Sized)) -> bool {
        fs.stat(&self.to_native_string())
            .is_ok_and(|stat| stat.is_file)
    }

    /// Resolve to the canonical absolute form reported by the filesystem,
    /// re-parsed as a native-style path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the path does not exist, or the
    /// underlying I/O failure.
    pub fn make_absolute(&self, fs: &(impl Filesystem + ?Sized)) -> Result<Self> {
        let native = self.to_native_string();
        let canonical = fs.canonicalize(&native)?;
        log::debug!("canonicalized '{native}' to '{canonical}'");
        Ok(Self::new(&canonical))
    }
}

fn has_drive_prefix(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

impl PartialEq for FsPath {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for FsPath {}

impl Hash for FsPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segments.hash(state);
    }
}

impl fmt::Display for FsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_native_string())
    }
}

impl FromStr for FsPath {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for FsPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FsPath {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl Div<&FsPath> for &FsPath {
    type Output = Result<FsPath>;

    fn div(self, rhs: &FsPath) -> Self::Output {
        self.join(rhs)
    }
}

impl Div<&str> for &FsPath {
    type Output = Result<FsPath>;

    /// Parses `rhs` in the style of the left operand before joining.
    fn div(self, rhs: &str) -> Self::Output {
        self.join(&FsPath::with_style(rhs, self.style))
    }
}
