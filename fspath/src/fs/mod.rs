//! The filesystem capability boundary.
//!
//! Everything the path and resolver code needs from the host operating
//! system goes through the [`Filesystem`] trait. Paths cross the boundary as
//! native-style strings produced by [`FsPath::to_native_string`].
//!
//! Two implementations ship with the crate:
//!
//! - [`HostFs`]: the real operating system, via `std::fs`
//! - [`MemoryFs`]: an in-memory tree, for tests and dry runs
//!
//! The trait methods report structured [`Error`]s. The boolean helpers in
//! [`ops`] sit on top of them for callers that only need success or failure.
//!
//! # Examples
//!
//! ```
//! use fspath::fs::{Filesystem, MemoryFs};
//!
//! let fs = MemoryFs::new();
//! fs.create_dir_all("/srv/www/html").unwrap();
//! assert!(fs.stat("/srv/www").unwrap().is_dir);
//! assert_eq!(fs.list_children("/srv").unwrap(), ["www"]);
//! ```

mod host;
mod memory;
pub mod ops;

use std::sync::Arc;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::path::FsPath;

pub use host::HostFs;
pub use memory::MemoryFs;

/// The subset of `stat` the library relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FileStat {
    /// Size in bytes.
    pub size: u64,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Whether the entry is a regular file.
    pub is_file: bool,
}

/// Host operations consumed by [`FsPath`], the resolver and directory
/// traversal.
///
/// Every method is a single blocking call with no retries, except the two
/// recursive defaults described below.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; methods take `&self`.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Size and kind of the entry at `path`, following symlinks.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if nothing exists at `path`
    /// - [`Error::PermissionDenied`] or [`Error::Io`] for other failures
    fn stat(&self, path: &str) -> Result<FileStat>;

    /// Whether anything exists at `path`. Any stat failure reads as `false`.
    fn exists(&self, path: &str) -> bool {
        self.stat(path).is_ok()
    }

    /// Create exactly one directory level.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if the parent is missing
    /// - [`Error::AlreadyExists`] if `path` exists
    fn create_dir(&self, path: &str) -> Result<()>;

    /// Create `path` and every missing ancestor.
    ///
    /// Succeeds if `path` is already a directory. Otherwise tries the leaf
    /// directly; only when that fails with a missing component does it
    /// create the parent chain and retry the leaf once.
    ///
    /// # Errors
    ///
    /// Returns the first failure that is not a missing component.
    fn create_dir_all(&self, path: &str) -> Result<()> {
        if self.stat(path).is_ok_and(|stat| stat.is_dir) {
            return Ok(());
        }

        match self.create_dir(path) {
            Err(e) if e.is_not_found() => {
                let parent = FsPath::new(path).parent_path();
                if parent.is_empty() {
                    return Err(e);
                }
                let parent = parent.to_native_string();
                log::debug!("creating missing parent '{parent}' of '{path}'");
                self.create_dir_all(&parent)?;
                self.create_dir(path)
            }
            other => other,
        }
    }

    /// Remove an empty directory.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if the path does not exist
    /// - [`Error::DirectoryNotEmpty`] or [`Error::Io`] if it still has entries
    fn remove_dir(&self, path: &str) -> Result<()>;

    /// Remove a directory and everything under it.
    ///
    /// Children are removed before their parent. A failed removal does not
    /// stop the walk; the first failure is reported once the walk is done.
    ///
    /// # Errors
    ///
    /// - [`Error::NotADirectory`] if `path` is not a directory
    /// - the first failure met while removing entries
    fn remove_dir_all(&self, path: &str) -> Result<()> {
        if !self.stat(path)?.is_dir {
            return Err(Error::NotADirectory {
                path: path.to_string(),
            });
        }

        let mut first_error = None;
        remove_tree(self, path, &mut first_error);
        first_error.map_or(Ok(()), Err)
    }

    /// Remove a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the file does not exist.
    fn remove_file(&self, path: &str) -> Result<()>;

    /// Set the length of an existing file, extending with zeros or cutting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the file does not exist.
    fn truncate(&self, path: &str, len: u64) -> Result<()>;

    /// The current working directory as a native string.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined.
    fn current_dir(&self) -> Result<String>;

    /// Canonical absolute form of `path` (realpath semantics).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the path does not exist.
    fn canonicalize(&self, path: &str) -> Result<String>;

    /// Names of the entries directly inside `path`.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if the path does not exist
    /// - [`Error::NotADirectory`] if it is not a directory
    fn list_children(&self, path: &str) -> Result<Vec<String>>;
}

fn remove_tree<F: Filesystem + ?Sized>(fs: &F, dir: &str, first_error: &mut Option<Error>) {
    match fs.list_children(dir) {
        Ok(children) => {
            for name in children {
                let child = match &FsPath::new(dir) / name.as_str() {
                    Ok(child) => child.to_native_string(),
                    Err(e) => {
                        record_failure(dir, e, first_error);
                        continue;
                    }
                };
                match fs.stat(&child) {
                    Ok(stat) if stat.is_dir => remove_tree(fs, &child, first_error),
                    Ok(_) => {
                        if let Err(e) = fs.remove_file(&child) {
                            record_failure(&child, e, first_error);
                        }
                    }
                    Err(e) => record_failure(&child, e, first_error),
                }
            }
        }
        Err(e) => record_failure(dir, e, first_error),
    }

    if let Err(e) = fs.remove_dir(dir) {
        record_failure(dir, e, first_error);
    }
}

fn record_failure(path: &str, err: Error, first_error: &mut Option<Error>) {
    log::warn!("recursive removal failed at '{path}': {err}");
    if first_error.is_none() {
        *first_error = Some(err);
    }
}

macro_rules! forward_filesystem {
    ($($target:ty),*) => {$(
        impl<T: Filesystem + ?Sized> Filesystem for $target {
            fn stat(&self, path: &str) -> Result<FileStat> {
                (**self).stat(path)
            }
            fn exists(&self, path: &str) -> bool {
                (**self).exists(path)
            }
            fn create_dir(&self, path: &str) -> Result<()> {
                (**self).create_dir(path)
            }
            fn create_dir_all(&self, path: &str) -> Result<()> {
                (**self).create_dir_all(path)
            }
            fn remove_dir(&self, path: &str) -> Result<()> {
                (**self).remove_dir(path)
            }
            fn remove_dir_all(&self, path: &str) -> Result<()> {
                (**self).remove_dir_all(path)
            }
            fn remove_file(&self, path: &str) -> Result<()> {
                (**self).remove_file(path)
            }
            fn truncate(&self, path: &str, len: u64) -> Result<()> {
                (**self).truncate(path, len)
            }
            fn current_dir(&self) -> Result<String> {
                (**self).current_dir()
            }
            fn canonicalize(&self, path: &str) -> Result<String> {
                (**self).canonicalize(path)
            }
            fn list_children(&self, path: &str) -> Result<Vec<String>> {
                (**self).list_children(path)
            }
        }
    )*};
}

forward_filesystem!(&T, Box<T>, Arc<T>);
