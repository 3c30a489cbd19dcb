//! Success-or-failure wrappers over [`Filesystem`].
//!
//! Each function serializes the path in its native style, performs one
//! boundary call and reports only whether it worked. Failures are logged at
//! debug level; callers that need the reason should call the trait directly.

use crate::error::Result;
use crate::fs::Filesystem;
use crate::path::FsPath;

fn report(operation: &str, path: &str, result: Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::debug!("{operation} '{path}' failed: {e}");
            false
        }
    }
}

/// Create a single directory. Fails if the parent is missing or the entry
/// already exists.
pub fn create_directory(fs: &(impl Filesystem + ?Sized), path: &FsPath) -> bool {
    let native = path.to_native_string();
    report("create_directory", &native, fs.create_dir(&native))
}

/// Create a directory and any missing ancestors.
///
/// # Examples
///
/// ```
/// use fspath::FsPath;
/// use fspath::fs::{ops, Filesystem, MemoryFs};
///
/// let fs = MemoryFs::new();
/// assert!(ops::create_directory_recursive(&fs, &FsPath::new("/a/b/c")));
/// assert!(fs.exists("/a/b"));
/// ```
pub fn create_directory_recursive(fs: &(impl Filesystem + ?Sized), path: &FsPath) -> bool {
    let native = path.to_native_string();
    report(
        "create_directory_recursive",
        &native,
        fs.create_dir_all(&native),
    )
}

/// Remove an empty directory.
pub fn remove_directory(fs: &(impl Filesystem + ?Sized), path: &FsPath) -> bool {
    let native = path.to_native_string();
    report("remove_directory", &native, fs.remove_dir(&native))
}

/// Remove a directory and all of its contents. Partial removals are
/// possible: `false` means at least one entry could not be removed.
pub fn remove_directory_recursive(fs: &(impl Filesystem + ?Sized), path: &FsPath) -> bool {
    let native = path.to_native_string();
    report(
        "remove_directory_recursive",
        &native,
        fs.remove_dir_all(&native),
    )
}

/// Remove a file.
pub fn remove_file(fs: &(impl Filesystem + ?Sized), path: &FsPath) -> bool {
    let native = path.to_native_string();
    report("remove_file", &native, fs.remove_file(&native))
}

/// Set the size of an existing file.
pub fn resize_file(fs: &(impl Filesystem + ?Sized), path: &FsPath, target_length: u64) -> bool {
    let native = path.to_native_string();
    report("resize_file", &native, fs.truncate(&native, target_length))
}

/// The current working directory as an [`FsPath`] in native style.
///
/// # Errors
///
/// Returns an error if the boundary cannot report the working directory.
pub fn cwd(fs: &(impl Filesystem + ?Sized)) -> Result<FsPath> {
    let dir = fs.current_dir()?;
    log::debug!("current directory is '{dir}'");
    Ok(FsPath::new(&dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::fs::{MemoryFs, MockFilesystem};

    #[test]
    fn test_create_directory_single_level() {
        let fs = MemoryFs::new();
        assert!(create_directory(&fs, &FsPath::new("/one")));
        assert!(!create_directory(&fs, &FsPath::new("/one")));
        assert!(!create_directory(&fs, &FsPath::new("/x/y")));
    }

    #[test]
    fn test_create_directory_recursive() {
        let fs = MemoryFs::new();
        assert!(create_directory_recursive(&fs, &FsPath::new("/a/b/c")));
        assert!(create_directory_recursive(&fs, &FsPath::new("/a/b/c")));
        assert!(fs.stat("/a/b/c").unwrap().is_dir);
    }

    #[test]
    fn test_remove_directory() {
        let fs = MemoryFs::new();
        fs.insert_file("/d/f", 1).unwrap();
        assert!(!remove_directory(&fs, &FsPath::new("/d")));
        assert!(remove_file(&fs, &FsPath::new("/d/f")));
        assert!(remove_directory(&fs, &FsPath::new("/d")));
        assert!(!remove_directory(&fs, &FsPath::new("/d")));
    }

    #[test]
    fn test_remove_directory_recursive() {
        let fs = MemoryFs::new();
        fs.insert_file("/t/a/b/c.txt", 5).unwrap();
        fs.insert_file("/t/d.txt", 5).unwrap();
        assert!(remove_directory_recursive(&fs, &FsPath::new("/t")));
        assert!(!fs.exists("/t"));
        assert!(!remove_directory_recursive(&fs, &FsPath::new("/t")));
    }

    #[test]
    fn test_remove_file_missing() {
        let fs = MemoryFs::new();
        assert!(!remove_file(&fs, &FsPath::new("/nothing")));
    }

    #[test]
    fn test_resize_file() {
        let fs = MemoryFs::new();
        fs.insert_file("/f", 10).unwrap();
        assert!(resize_file(&fs, &FsPath::new("/f"), 3));
        assert_eq!(fs.stat("/f").unwrap().size, 3);
        assert!(!resize_file(&fs, &FsPath::new("/g"), 3));
    }

    #[test]
    fn test_cwd_from_boundary() {
        let mut mock = MockFilesystem::new();
        mock.expect_current_dir()
            .times(1)
            .returning(|| Ok("/home/user".to_string()));

        let dir = cwd(&mock).unwrap();
        assert!(dir.is_absolute() || cfg!(windows));
        assert_eq!(dir.segments(), ["home", "user"]);
    }

    #[test]
    fn test_cwd_error_propagates() {
        let mut mock = MockFilesystem::new();
        mock.expect_current_dir().returning(|| {
            Err(Error::PermissionDenied {
                path: ".".to_string(),
            })
        });
        assert!(cwd(&mock).unwrap_err().is_permission_denied());
    }
}
