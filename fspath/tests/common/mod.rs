//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use fspath::{FsPath, MemoryFs, PathStyle};
use tempfile::TempDir;

/// Creates a temporary directory for testing.
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// The UTF-8 form of a host path.
pub fn host_str(path: &Path) -> String {
    path.to_str().expect("temp paths are UTF-8").to_string()
}

/// A native [`FsPath`] for a host path.
pub fn host_path(path: &Path) -> FsPath {
    FsPath::new(&host_str(path))
}

/// Shorthand for a posix-style path.
pub fn posix(s: &str) -> FsPath {
    FsPath::with_style(s, PathStyle::Posix)
}

/// Write `contents` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, contents: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parents");
    }
    fs::write(path, contents).expect("write file");
}

/// An in-memory tree with files at each of `files`, each one byte long.
pub fn memory_tree(files: &[&str]) -> MemoryFs {
    let fs = MemoryFs::new();
    for file in files {
        fs.insert_file(file, 1).expect("insert file");
    }
    fs
}
