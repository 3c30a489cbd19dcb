//! Search-path resolution.
//!
//! A [`Resolver`] holds an ordered list of base directories. Resolving a
//! relative target joins it onto each base in turn and returns the first
//! combination that exists on the [`Filesystem`]. A miss is not an error:
//! the target comes back unchanged and callers check existence themselves.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice;

use crate::config::{Config, CwdPosition};
use crate::error::Result;
use crate::fs::{ops, Filesystem, HostFs};
use crate::path::FsPath;

/// An ordered list of search directories bound to a filesystem.
///
/// Mutators only touch the in-memory list; I/O happens in [`resolve`] and
/// [`resolve_all`], and in the constructors that read the working
/// directory.
///
/// # Examples
///
/// ```
/// use fspath::{FsPath, MemoryFs, Resolver};
///
/// let fs = MemoryFs::new();
/// fs.insert_file("/usr/local/bin/tool", 10).unwrap();
///
/// let resolver = Resolver::with_search_paths(
///     fs,
///     [FsPath::new("/home/user"), FsPath::new("/usr/local")],
/// );
///
/// let hit = resolver.resolve(&FsPath::new("bin/tool")).unwrap();
/// assert_eq!(hit, FsPath::new("/usr/local/bin/tool"));
///
/// let miss = resolver.resolve(&FsPath::new("bin/other")).unwrap();
/// assert_eq!(miss, FsPath::new("bin/other"));
/// ```
///
/// [`resolve`]: Resolver::resolve
/// [`resolve_all`]: Resolver::resolve_all
#[derive(Debug, Clone)]
pub struct Resolver<F = HostFs> {
    fs: F,
    search_paths: Vec<FsPath>,
}

impl Resolver<HostFs> {
    /// A resolver over the host filesystem searching only the current
    /// working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn new() -> Result<Self> {
        Self::with_filesystem(HostFs)
    }
}

impl<F: Filesystem> Resolver<F> {
    /// A resolver over `fs` searching only its current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `fs` cannot report the working directory.
    pub fn with_filesystem(fs: F) -> Result<Self> {
        let cwd = ops::cwd(&fs)?;
        Ok(Self {
            fs,
            search_paths: vec![cwd],
        })
    }

    /// A resolver over `fs` with exactly `paths`, in order. No I/O.
    pub fn with_search_paths(fs: F, paths: impl IntoIterator<Item = FsPath>) -> Self {
        Self {
            fs,
            search_paths: paths.into_iter().collect(),
        }
    }

    /// A resolver seeded from configuration.
    ///
    /// Configured paths are parsed in native style. When `include_cwd` is
    /// set the working directory is placed first or last per
    /// `cwd_position`.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is needed and cannot be
    /// determined.
    pub fn from_config(fs: F, config: &Config) -> Result<Self> {
        let mut search_paths: Vec<FsPath> =
            config.search_paths().iter().map(|p| FsPath::new(p)).collect();

        if config.include_cwd() {
            let cwd = ops::cwd(&fs)?;
            match config.cwd_position() {
                CwdPosition::First => search_paths.insert(0, cwd),
                CwdPosition::Last => search_paths.push(cwd),
            }
        }

        log::debug!("resolver seeded with {} search paths", search_paths.len());
        Ok(Self { fs, search_paths })
    }

    /// The first `base / target` that exists, or `target` unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`](crate::Error::InvalidOperation)
    /// as soon as a join fails: `target` is absolute, or its style differs
    /// from a base's.
    pub fn resolve(&self, target: &FsPath) -> Result<FsPath> {
        for base in &self.search_paths {
            let candidate = base.join(target)?;
            if candidate.file_exists(&self.fs) {
                log::debug!("resolved '{target}' to '{candidate}'");
                return Ok(candidate);
            }
        }

        log::debug!(
            "'{target}' not found in {} search paths",
            self.search_paths.len()
        );
        Ok(target.clone())
    }

    /// Every existing `base / target`, in search order.
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Resolver::resolve).
    pub fn resolve_all(&self, target: &FsPath) -> Result<Vec<FsPath>> {
        let mut hits = Vec::new();
        for base in &self.search_paths {
            let candidate = base.join(target)?;
            if candidate.file_exists(&self.fs) {
                hits.push(candidate);
            }
        }
        Ok(hits)
    }

    /// The filesystem queried by [`resolve`](Resolver::resolve).
    pub fn filesystem(&self) -> &F {
        &self.fs
    }
}

impl<F> Resolver<F> {
    /// Search `path` before every other entry.
    pub fn prepend(&mut self, path: FsPath) {
        self.search_paths.insert(0, path);
    }

    /// Search `path` after every other entry.
    pub fn append(&mut self, path: FsPath) {
        self.search_paths.push(path);
    }

    /// Remove and return the entry at `index`, or `None` if out of range.
    pub fn erase(&mut self, index: usize) -> Option<FsPath> {
        (index < self.search_paths.len()).then(|| self.search_paths.remove(index))
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.search_paths.clear();
    }

    /// The entry at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FsPath> {
        self.search_paths.get(index)
    }

    /// The entry at `index`, mutably.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut FsPath> {
        self.search_paths.get_mut(index)
    }

    /// Number of search paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.search_paths.len()
    }

    /// Whether there are no search paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_paths.is_empty()
    }

    /// Entries in search order.
    pub fn iter(&self) -> slice::Iter<'_, FsPath> {
        self.search_paths.iter()
    }

    /// Entries in search order, mutably.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, FsPath> {
        self.search_paths.iter_mut()
    }

    /// Entries as a slice.
    #[must_use]
    pub fn search_paths(&self) -> &[FsPath] {
        &self.search_paths
    }
}

impl<F> Index<usize> for Resolver<F> {
    type Output = FsPath;

    fn index(&self, index: usize) -> &FsPath {
        &self.search_paths[index]
    }
}

impl<F> IndexMut<usize> for Resolver<F> {
    fn index_mut(&mut self, index: usize) -> &mut FsPath {
        &mut self.search_paths[index]
    }
}

impl<'a, F> IntoIterator for &'a Resolver<F> {
    type Item = &'a FsPath;
    type IntoIter = slice::Iter<'a, FsPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<F> fmt::Display for Resolver<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "resolver[")?;
        let last = self.search_paths.len().saturating_sub(1);
        for (i, path) in self.search_paths.iter().enumerate() {
            let comma = if i < last { "," } else { "" };
            writeln!(f, "  \"{path}\"{comma}")?;
        }
        write!(f, "]")
    }
}
