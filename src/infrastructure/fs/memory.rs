//! In-memory File System
//!
//! A `FileSystem` over a map of paths, for exercising the resolver and the
//! compiler without touching the disk. Directories exist implicitly above
//! every file and explicitly once created.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::ports::file_system::{DirEntry, FileSystem, FsError, FsResult};

/// A state-changing operation performed on a `MemoryFs`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Write(PathBuf),
    CreateDir(PathBuf),
    Remove(PathBuf),
}

/// In-memory file tree
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: Mutex<BTreeMap<PathBuf, String>>,
    dirs: Mutex<BTreeSet<PathBuf>>,
    unlistable: Mutex<BTreeSet<PathBuf>>,
    read_only: Mutex<BTreeSet<PathBuf>>,
    mutations: Mutex<Vec<Mutation>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// `./a/b` and `a/b` name the same entry
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from `(path, content)` pairs; seeding is not recorded as mutation
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let fs = Self::new();
        {
            let mut map = lock(&fs.files);
            for (path, content) in files {
                map.insert(normalize(Path::new(path)), content.to_string());
            }
        }
        fs
    }

    /// Make listing `dir` fail with a permission error
    pub fn deny_listing(&self, dir: impl AsRef<Path>) {
        lock(&self.unlistable).insert(normalize(dir.as_ref()));
    }

    /// Make writes and directory creation at or below `dir` fail
    pub fn deny_writes(&self, dir: impl AsRef<Path>) {
        lock(&self.read_only).insert(normalize(dir.as_ref()));
    }

    /// Content of a file, if present
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        lock(&self.files).get(&normalize(path.as_ref())).cloned()
    }

    /// Every file path, sorted
    pub fn file_paths(&self) -> Vec<PathBuf> {
        lock(&self.files).keys().cloned().collect()
    }

    /// Operations that changed the tree, in order
    pub fn mutations(&self) -> Vec<Mutation> {
        lock(&self.mutations).clone()
    }

    fn is_dir(&self, dir: &Path) -> bool {
        if dir.as_os_str().is_empty() {
            return true;
        }
        let has_dir = lock(&self.dirs)
            .iter()
            .any(|d| d.starts_with(dir));
        has_dir
            || lock(&self.files)
                .keys()
                .any(|f| f != dir && f.starts_with(dir))
    }

    fn check_writable(&self, path: &Path) -> FsResult<()> {
        if lock(&self.read_only).iter().any(|d| path.starts_with(d)) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        Ok(())
    }

    fn record(&self, mutation: Mutation) {
        lock(&self.mutations).push(mutation);
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        self.contents(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let key = normalize(path);
        self.check_writable(&key)?;
        lock(&self.files).insert(key.clone(), content.to_string());
        self.record(Mutation::Write(key));
        Ok(())
    }

    fn is_file(&self, path: &Path) -> bool {
        lock(&self.files).contains_key(&normalize(path))
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        let key = normalize(path);
        self.check_writable(&key)?;
        if lock(&self.files).remove(&key).is_none() {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        self.record(Mutation::Remove(key));
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        let key = normalize(path);
        if self.is_file(&key) {
            return Err(FsError::NotADirectory(path.to_path_buf()));
        }
        self.check_writable(&key)?;
        lock(&self.dirs).insert(key.clone());
        self.record(Mutation::CreateDir(key));
        Ok(())
    }

    fn list_dir(&self, dir: &Path, filter: &dyn Fn(&DirEntry) -> bool) -> FsResult<Vec<DirEntry>> {
        let key = normalize(dir);
        if lock(&self.unlistable).contains(&key) {
            return Err(FsError::PermissionDenied(dir.to_path_buf()));
        }
        if self.is_file(&key) {
            return Err(FsError::NotADirectory(dir.to_path_buf()));
        }
        if !self.is_dir(&key) {
            return Err(FsError::NotFound(dir.to_path_buf()));
        }

        // child name -> is_dir
        let mut children: BTreeMap<String, bool> = BTreeMap::new();
        let mut visit = |path: &Path, is_file: bool| {
            if let Ok(rest) = path.strip_prefix(&key) {
                let mut components = rest.components();
                if let Some(first) = components.next() {
                    let name = first.as_os_str().to_string_lossy().into_owned();
                    let child_is_dir = !is_file || components.next().is_some();
                    *children.entry(name).or_insert(false) |= child_is_dir;
                }
            }
        };
        for file in lock(&self.files).keys() {
            visit(file, true);
        }
        for created in lock(&self.dirs).iter() {
            visit(created, false);
        }

        Ok(children
            .into_iter()
            .map(|(name, is_dir)| DirEntry::new(dir.join(name), is_dir))
            .filter(|entry| filter(entry))
            .collect())
    }
}
