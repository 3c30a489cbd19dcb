//! An in-memory directory tree.

use std::collections::BTreeMap;
use std::io;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Error, Result};
use crate::fs::{FileStat, Filesystem};
use crate::path::tokenize::tokenize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Dir,
    File { size: u64 },
}

/// [`Filesystem`] held entirely in memory.
///
/// Entries are keyed by their absolute, slash-separated form. Input paths
/// accept either separator, a leading drive such as `C:` counts as absolute,
/// `.` and `..` are resolved lexically, and relative paths start from the
/// configured current directory (`/` by default). There are no symlinks,
/// so canonicalization is purely lexical plus an existence check.
///
/// # Examples
///
/// ```
/// use fspath::fs::{Filesystem, MemoryFs};
///
/// let fs = MemoryFs::new();
/// fs.insert_file("/usr/local/bin/tool", 1024).unwrap();
/// assert_eq!(fs.stat("/usr/local/bin/tool").unwrap().size, 1024);
/// assert!(fs.stat("/usr/local").unwrap().is_dir);
/// assert_eq!(fs.canonicalize("/usr/./local/../local").unwrap(), "/usr/local");
/// ```
#[derive(Debug)]
pub struct MemoryFs {
    nodes: RwLock<BTreeMap<String, Node>>,
    cwd: String,
}

impl Default for MemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFs {
    /// An empty tree containing only `/`, with `/` as current directory.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert("/".to_string(), Node::Dir);
        Self {
            nodes: RwLock::new(nodes),
            cwd: "/".to_string(),
        }
    }

    /// Use `cwd` as the current directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if `cwd` cannot be created as a directory.
    pub fn with_current_dir(mut self, cwd: &str) -> Result<Self> {
        let key = self.key(cwd);
        self.create_dir_all(&key)?;
        self.cwd = key;
        Ok(self)
    }

    /// Create a file of `size` bytes, creating missing parent directories.
    /// An existing file is resized.
    ///
    /// # Errors
    ///
    /// Returns an error if a parent cannot be created or `path` is a directory.
    pub fn insert_file(&self, path: &str, size: u64) -> Result<()> {
        let key = self.key(path);
        if let Some(parent) = parent_key(&key) {
            self.create_dir_all(&parent)?;
        }

        let mut nodes = self.write();
        match nodes.get(&key) {
            Some(Node::Dir) => Err(is_a_directory(&key)),
            _ => {
                nodes.insert(key, Node::File { size });
                Ok(())
            }
        }
    }

    /// Number of entries, including `/`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether only `/` exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, Node>> {
        self.nodes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Node>> {
        self.nodes.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn key(&self, path: &str) -> String {
        let absolute = path.starts_with(['/', '\\'])
            || (path.len() >= 2
                && path.as_bytes()[0].is_ascii_alphabetic()
                && path.as_bytes()[1] == b':');

        let mut segments: Vec<&str> = if absolute {
            Vec::new()
        } else {
            tokenize(&self.cwd, &['/']).collect()
        };

        for segment in tokenize(path, &['/', '\\']) {
            match segment {
                "." => {}
                ".." => {
                    segments.pop();
                }
                other => segments.push(other),
            }
        }

        format!("/{}", segments.join("/"))
    }

    fn children_of<'a>(
        nodes: &'a BTreeMap<String, Node>,
        dir: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        let prefix = if dir == "/" {
            "/".to_string()
        } else {
            format!("{dir}/")
        };
        nodes
            .range(prefix.clone()..)
            .map(|(k, _)| k.as_str())
            .take_while(move |k| k.starts_with(prefix.as_str()))
            .filter_map(move |k| {
                let rest = &k[dir.len().max(1)..];
                let rest = rest.strip_prefix('/').unwrap_or(rest);
                (!rest.is_empty() && !rest.contains('/')).then_some(rest)
            })
    }
}

fn parent_key(key: &str) -> Option<String> {
    if key == "/" {
        return None;
    }
    let (parent, _) = key.rsplit_once('/')?;
    Some(if parent.is_empty() {
        "/".to_string()
    } else {
        parent.to_string()
    })
}

fn not_found(key: &str) -> Error {
    Error::NotFound {
        path: key.to_string(),
    }
}

fn is_a_directory(key: &str) -> Error {
    Error::Io(io::Error::other(format!("is a directory: {key}")))
}

impl Filesystem for MemoryFs {
    fn stat(&self, path: &str) -> Result<FileStat> {
        let key = self.key(path);
        match self.read().get(&key) {
            Some(Node::Dir) => Ok(FileStat {
                size: 0,
                is_dir: true,
                is_file: false,
            }),
            Some(Node::File { size }) => Ok(FileStat {
                size: *size,
                is_dir: false,
                is_file: true,
            }),
            None => Err(not_found(&key)),
        }
    }

    fn create_dir(&self, path: &str) -> Result<()> {
        let key = self.key(path);
        let mut nodes = self.write();

        if nodes.contains_key(&key) {
            return Err(Error::AlreadyExists { path: key });
        }
        let parent = parent_key(&key).ok_or_else(|| not_found(&key))?;
        match nodes.get(&parent) {
            Some(Node::Dir) => {
                nodes.insert(key, Node::Dir);
                Ok(())
            }
            Some(Node::File { .. }) => Err(Error::NotADirectory { path: parent }),
            None => Err(not_found(&parent)),
        }
    }

    fn remove_dir(&self, path: &str) -> Result<()> {
        let key = self.key(path);
        let mut nodes = self.write();

        match nodes.get(&key) {
            None => return Err(not_found(&key)),
            Some(Node::File { .. }) => return Err(Error::NotADirectory { path: key }),
            Some(Node::Dir) => {}
        }
        if key == "/" {
            return Err(Error::PermissionDenied { path: key });
        }
        if Self::children_of(&nodes, &key).next().is_some() {
            return Err(Error::DirectoryNotEmpty { path: key });
        }
        nodes.remove(&key);
        Ok(())
    }

    fn remove_file(&self, path: &str) -> Result<()> {
        let key = self.key(path);
        let mut nodes = self.write();

        match nodes.get(&key) {
            Some(Node::File { .. }) => {
                nodes.remove(&key);
                Ok(())
            }
            Some(Node::Dir) => Err(is_a_directory(&key)),
            None => Err(not_found(&key)),
        }
    }

    fn truncate(&self, path: &str, len: u64) -> Result<()> {
        let key = self.key(path);
        let mut nodes = self.write();

        match nodes.get_mut(&key) {
            Some(Node::File { size }) => {
                *size = len;
                Ok(())
            }
            Some(Node::Dir) => Err(is_a_directory(&key)),
            None => Err(not_found(&key)),
        }
    }

    fn current_dir(&self) -> Result<String> {
        Ok(self.cwd.clone())
    }

    fn canonicalize(&self, path: &str) -> Result<String> {
        let key = self.key(path);
        if self.read().contains_key(&key) {
            Ok(key)
        } else {
            Err(not_found(&key))
        }
    }

    fn list_children(&self, path: &str) -> Result<Vec<String>> {
        let key = self.key(path);
        let nodes = self.read();

        match nodes.get(&key) {
            Some(Node::Dir) => Ok(Self::children_of(&nodes, &key)
                .map(str::to_string)
                .collect()),
            Some(Node::File { .. }) => Err(Error::NotADirectory { path: key }),
            None => Err(not_found(&key)),
        }
    }
}
