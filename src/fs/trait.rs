//! FileSystem trait definition

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory names never descended into while walking a scan root.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] =
    &["build", "target", "out", "node_modules", ".gradle", ".git"];

/// Type of file system entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Directory,
    Symlink,
}

/// Traversal rules applied by [`FileSystem::walk_files`]
///
/// The root itself is always visited, even when its own name would be
/// filtered; the rules only apply to entries below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOptions {
    /// Skip files and directories whose name starts with `.`
    pub skip_hidden: bool,

    /// Directory names that are never descended into
    pub excluded_dirs: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            skip_hidden: true,
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl WalkOptions {
    /// Returns true if an entry with this name below the root must be pruned.
    pub fn is_pruned(&self, name: &str, is_dir: bool) -> bool {
        if self.skip_hidden && name.starts_with('.') {
            return true;
        }
        is_dir && self.excluded_dirs.iter().any(|d| d == name)
    }
}

/// A directory could not be enumerated while walking a scan root
#[derive(Debug, Error)]
#[error("failed to walk {}: {source}", .path.display())]
pub struct WalkError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Abstraction over file system operations for testability
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Read file contents as text.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so only a
    /// failure to open or read the file is an error.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Recursively list the regular files reachable from `root`.
    ///
    /// Symbolic links are neither followed nor returned. The result is
    /// sorted with `Path` ordering, which compares component by component,
    /// so the order is a depth-first walk with siblings sorted by name.
    /// A `root` that is itself a file yields just that file.
    fn walk_files(&self, root: &Path, options: &WalkOptions) -> Result<Vec<PathBuf>, WalkError>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn walk_files(&self, root: &Path, options: &WalkOptions) -> Result<Vec<PathBuf>, WalkError> {
        (**self).walk_files(root, options)
    }
}
