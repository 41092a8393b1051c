//! FileSystem port - abstraction over file I/O operations
//!
//! This trait lets the resolver and compiler touch the disk without
//! depending on a concrete implementation (local disk or in-memory tree).

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    /// File or directory not found
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Permission denied
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// Path exists but is not a directory
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    /// I/O error
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classify an I/O error raised while operating on `path`
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DirEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn new(path: impl Into<PathBuf>, is_dir: bool) -> Self {
        Self {
            path: path.into(),
            is_dir,
        }
    }

    /// Final path component, or "" for paths without one
    pub fn name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MemoryFs` - in-memory tree for testing
///
/// `Send + Sync` so the compiler can read layouts from a rayon pool.
pub trait FileSystem: Send + Sync {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file, replacing it
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if a regular file exists at `path`
    fn is_file(&self, path: &Path) -> bool;

    /// Remove a file
    fn remove(&self, path: &Path) -> FsResult<()>;

    /// Create directory and parents; an existing directory is not an error
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// List the direct children of `dir` accepted by `filter`, sorted by path
    ///
    /// Fails with `FsError::NotFound` when `dir` does not exist.
    fn list_dir(&self, dir: &Path, filter: &dyn Fn(&DirEntry) -> bool) -> FsResult<Vec<DirEntry>>;

    /// Like `list_dir`, but a missing directory lists as empty
    ///
    /// Every other failure (permissions, not a directory) is still surfaced.
    fn list_dir_if_exists(
        &self,
        dir: &Path,
        filter: &dyn Fn(&DirEntry) -> bool,
    ) -> FsResult<Vec<DirEntry>> {
        match self.list_dir(dir, filter) {
            Err(e) if e.is_not_found() => Ok(Vec::new()),
            other => other,
        }
    }
}
