//! The operating system behind `std::fs`.

use std::env;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::fs::{FileStat, Filesystem};

/// [`Filesystem`] backed by the host operating system.
///
/// # Examples
///
/// ```no_run
/// use fspath::fs::{Filesystem, HostFs};
///
/// let fs = HostFs;
/// let cwd = fs.current_dir().unwrap();
/// assert!(fs.stat(&cwd).unwrap().is_dir);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFs;

fn utf8(path: PathBuf) -> Result<String> {
    path.into_os_string()
        .into_string()
        .map_err(|raw| Error::Validation {
            field: "path".to_string(),
            message: format!("not valid UTF-8: {}", raw.to_string_lossy()),
        })
}

impl Filesystem for HostFs {
    fn stat(&self, path: &str) -> Result<FileStat> {
        let meta = fs::metadata(path).map_err(|e| Error::from_io(e, path))?;
        Ok(FileStat {
            size: meta.len(),
            is_dir: meta.is_dir(),
            is_file: meta.is_file(),
        })
    }

    fn create_dir(&self, path: &str) -> Result<()> {
        fs::create_dir(path).map_err(|e| Error::from_io(e, path))
    }

    fn remove_dir(&self, path: &str) -> Result<()> {
        fs::remove_dir(path).map_err(|e| Error::from_io(e, path))
    }

    // std's removal does not follow symlinked directories.
    fn remove_dir_all(&self, path: &str) -> Result<()> {
        let meta = fs::symlink_metadata(path).map_err(|e| Error::from_io(e, path))?;
        if !meta.is_dir() {
            return Err(Error::NotADirectory {
                path: path.to_string(),
            });
        }
        fs::remove_dir_all(path).map_err(|e| Error::from_io(e, path))
    }

    fn remove_file(&self, path: &str) -> Result<()> {
        fs::remove_file(path).map_err(|e| Error::from_io(e, path))
    }

    fn truncate(&self, path: &str, len: u64) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .open(path)
            .map_err(|e| Error::from_io(e, path))?;
        file.set_len(len).map_err(|e| Error::from_io(e, path))
    }

    fn current_dir(&self) -> Result<String> {
        utf8(env::current_dir()?)
    }

    fn canonicalize(&self, path: &str) -> Result<String> {
        let canonical = fs::canonicalize(path).map_err(|e| Error::from_io(e, path))?;
        utf8(canonical)
    }

    fn list_children(&self, path: &str) -> Result<Vec<String>> {
        let entries = fs::read_dir(path).map_err(|e| Error::from_io(e, path))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::from_io(e, path))?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => {
                    log::warn!(
                        "skipping non UTF-8 entry {} in '{path}'",
                        raw.to_string_lossy()
                    );
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn s(path: &std::path::Path) -> String {
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_stat_file_and_dir() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("data.bin");
        fs::write(&file, [0u8; 42]).unwrap();

        let stat = HostFs.stat(&s(&file)).unwrap();
        assert_eq!(stat.size, 42);
        assert!(stat.is_file);
        assert!(!stat.is_dir);

        let stat = HostFs.stat(&s(dir.path())).unwrap();
        assert!(stat.is_dir);
    }

    #[test]
    fn test_stat_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(HostFs.stat(&s(&missing)).unwrap_err().is_not_found());
        assert!(!HostFs.exists(&s(&missing)));
    }

    #[test]
    fn test_create_dir_requires_parent() {
        let dir = tempdir().unwrap();
        let deep = dir.path().join("a").join("b");
        assert!(HostFs.create_dir(&s(&deep)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_create_dir_all_builds_chain() {
        let dir = tempdir().unwrap();
        let deep = dir.path().join("a").join("b").join("c");
        HostFs.create_dir_all(&s(&deep)).unwrap();
        assert!(deep.is_dir());
        HostFs.create_dir_all(&s(&deep)).unwrap();
    }

    #[test]
    fn test_truncate_extends_and_shrinks() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, b"hello").unwrap();

        HostFs.truncate(&s(&file), 2).unwrap();
        assert_eq!(fs::read(&file).unwrap(), b"he");

        HostFs.truncate(&s(&file), 4).unwrap();
        assert_eq!(fs::read(&file).unwrap(), b"he\0\0");
    }

    #[test]
    fn test_truncate_missing_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nope");
        assert!(HostFs.truncate(&s(&file), 0).unwrap_err().is_not_found());
        assert!(!file.exists());
    }

    #[test]
    fn test_list_children_sorted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b"), b"").unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        fs::write(dir.path().join("c"), b"").unwrap();

        assert_eq!(HostFs.list_children(&s(dir.path())).unwrap(), ["a", "b", "c"]);
    }

    #[test]
    fn test_remove_dir_all() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("tree");
        fs::create_dir_all(root.join("x/y")).unwrap();
        fs::write(root.join("x/y/z"), b"1").unwrap();

        HostFs.remove_dir_all(&s(&root)).unwrap();
        assert!(!root.exists());
    }

    #[test]
    fn test_remove_dir_all_rejects_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, b"").unwrap();
        assert!(matches!(
            HostFs.remove_dir_all(&s(&file)),
            Err(Error::NotADirectory { .. })
        ));
    }

    #[test]
    fn test_canonicalize() {
        let dir = tempdir().unwrap();
        let canonical = HostFs.canonicalize(&s(dir.path())).unwrap();
        assert_eq!(canonical, s(&fs::canonicalize(dir.path()).unwrap()));

        let missing = dir.path().join("missing");
        assert!(HostFs.canonicalize(&s(&missing)).unwrap_err().is_not_found());
    }
}
