//! Directory traversal over a [`Filesystem`].
//!
//! Every listed entry is produced as `dir / name`, so results keep the
//! style and absolute flag of the starting path. Traversal follows whatever
//! `stat` follows; symlink loops are not detected.

use crate::error::Result;
use crate::fs::Filesystem;
use crate::path::FsPath;

/// One entry reached during [`walk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// `root / ... / name`.
    pub path: FsPath,
    /// Whether the entry is a directory that [`walk`] may descend into.
    pub is_dir: bool,
    /// 1 for direct children of the root.
    pub depth: usize,
}

/// What [`walk`] does after visiting an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkControl {
    /// Keep going, descending into directories.
    Continue,
    /// Do not descend into this directory; siblings are still visited.
    SkipChildren,
    /// End the walk now.
    Stop,
}

/// The direct children of `dir`, in the order the boundary lists them.
///
/// # Errors
///
/// Returns the listing failure, e.g. [`Error::NotFound`](crate::Error::NotFound)
/// or [`Error::NotADirectory`](crate::Error::NotADirectory).
///
/// # Examples
///
/// ```
/// use fspath::{walk, FsPath, MemoryFs};
///
/// let fs = MemoryFs::new();
/// fs.insert_file("/etc/hosts", 1).unwrap();
/// fs.insert_file("/etc/ssh/sshd_config", 1).unwrap();
///
/// let entries = walk::list_directory(&fs, &FsPath::new("/etc")).unwrap();
/// assert_eq!(entries, [FsPath::new("/etc/hosts"), FsPath::new("/etc/ssh")]);
/// ```
pub fn list_directory(fs: &(impl Filesystem + ?Sized), dir: &FsPath) -> Result<Vec<FsPath>> {
    fs.list_children(&dir.to_native_string())?
        .iter()
        .map(|name| dir / name.as_str())
        .collect()
}

/// Every entry below `dir`, parents before their children.
///
/// # Errors
///
/// Fails on the first directory that cannot be listed.
pub fn list_directory_recursive(
    fs: &(impl Filesystem + ?Sized),
    dir: &FsPath,
) -> Result<Vec<FsPath>> {
    let mut out = Vec::new();
    walk(fs, dir, |entry| {
        out.push(entry.path.clone());
        WalkControl::Continue
    })?;
    Ok(out)
}

/// Visit every entry below `root` in pre-order, letting `visit` prune
/// directories or stop early.
///
/// # Errors
///
/// Fails on the first directory that cannot be listed.
///
/// # Examples
///
/// ```
/// use fspath::walk::{walk, WalkControl};
/// use fspath::{FsPath, MemoryFs};
///
/// let fs = MemoryFs::new();
/// fs.insert_file("/src/main.rs", 1).unwrap();
/// fs.insert_file("/target/debug/app", 1).unwrap();
///
/// let mut seen = Vec::new();
/// walk(&fs, &FsPath::new("/"), |entry| {
///     seen.push(entry.path.filename().to_string());
///     if entry.path.filename() == "target" {
///         WalkControl::SkipChildren
///     } else {
///         WalkControl::Continue
///     }
/// })
/// .unwrap();
/// assert_eq!(seen, ["src", "main.rs", "target"]);
/// ```
pub fn walk<F>(fs: &(impl Filesystem + ?Sized), root: &FsPath, mut visit: F) -> Result<()>
where
    F: FnMut(&WalkEntry) -> WalkControl,
{
    walk_level(fs, root, 1, &mut visit)?;
    Ok(())
}

// Returns false once the walk has been stopped.
fn walk_level<F>(
    fs: &(impl Filesystem + ?Sized),
    dir: &FsPath,
    depth: usize,
    visit: &mut F,
) -> Result<bool>
where
    F: FnMut(&WalkEntry) -> WalkControl,
{
    for path in list_directory(fs, dir)? {
        let is_dir = path.is_directory(fs);
        let entry = WalkEntry {
            path,
            is_dir,
            depth,
        };

        match visit(&entry) {
            WalkControl::Stop => return Ok(false),
            WalkControl::SkipChildren => {}
            WalkControl::Continue => {
                if entry.is_dir && !walk_level(fs, &entry.path, depth + 1, visit)? {
                    return Ok(false);
                }
            }
        }
    }
    Ok(true)
}
