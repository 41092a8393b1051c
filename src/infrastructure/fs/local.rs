//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use crate::domain::ports::file_system::{DirEntry, FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes are atomic: content goes to a temp file in the target directory
/// which is then renamed over the destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        self.create_dir_all(dir)?;

        let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| FsError::from_io(dir, e))?;
        temp.write_all(content.as_bytes())
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|e| FsError::from_io(path, e))?;
        temp.persist(path)
            .map_err(|e| FsError::from_io(path, e.error))?;
        Ok(())
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(|e| FsError::from_io(path, e))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }

    fn list_dir(&self, dir: &Path, filter: &dyn Fn(&DirEntry) -> bool) -> FsResult<Vec<DirEntry>> {
        let read_dir = std::fs::read_dir(dir).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(dir.to_path_buf()),
            _ if dir.is_file() => FsError::NotADirectory(dir.to_path_buf()),
            _ => FsError::from_io(dir, e),
        })?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| FsError::from_io(dir, e))?;
            let path = entry.path();
            // Follow symlinks so a linked variant directory still counts.
            let is_dir = path.is_dir();
            let entry = DirEntry::new(path, is_dir);
            if filter(&entry) {
                entries.push(entry);
            }
        }
        entries.sort();
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn local_fs_write_and_read() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("Holder.java");
        let fs = LocalFs::new();

        fs.write(&file, "class A {}").unwrap();
        let content = fs.read(&file).unwrap();

        assert_eq!(content, "class A {}");
    }

    #[test]
    fn local_fs_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("com").join("example").join("Holder.java");
        let fs = LocalFs::new();

        fs.write(&file, "content").unwrap();

        assert!(file.exists());
    }

    #[test]
    fn local_fs_write_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("Holder.java");
        let fs = LocalFs::new();

        fs.write(&file, "old").unwrap();
        fs.write(&file, "new").unwrap();

        assert_eq!(fs.read(&file).unwrap(), "new");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn local_fs_read_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let err = LocalFs::new().read(&dir.path().join("nope.xml")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn local_fs_remove() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("remove.java");
        let fs = LocalFs::new();

        fs.write(&file, "content").unwrap();
        assert!(fs.is_file(&file));

        fs.remove(&file).unwrap();
        assert!(!fs.is_file(&file));
    }

    #[test]
    fn local_fs_create_dir_all_is_idempotent() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("c");
        let fs = LocalFs::new();

        fs.create_dir_all(&nested).unwrap();
        fs.create_dir_all(&nested).unwrap();

        assert!(nested.is_dir());
    }

    #[test]
    fn local_fs_list_dir_sorted_and_filtered() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("layout-land")).unwrap();
        std::fs::create_dir(dir.path().join("layout")).unwrap();
        std::fs::create_dir(dir.path().join("values")).unwrap();
        std::fs::write(dir.path().join("layout.txt"), "").unwrap();
        let fs = LocalFs::new();

        let entries = fs
            .list_dir(dir.path(), &|e: &DirEntry| e.is_dir && e.name().starts_with("layout"))
            .unwrap();

        let names: Vec<_> = entries.iter().map(|e| e.name().to_string()).collect();
        assert_eq!(names, vec!["layout", "layout-land"]);
    }

    #[test]
    fn local_fs_list_missing_dir() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();
        let missing = dir.path().join("missing");

        assert!(fs.list_dir(&missing, &|_| true).unwrap_err().is_not_found());
        assert!(fs.list_dir_if_exists(&missing, &|_| true).unwrap().is_empty());
    }

    #[test]
    fn local_fs_list_file_is_an_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("main.xml");
        std::fs::write(&file, "<a/>").unwrap();
        let fs = LocalFs::new();

        assert!(fs.list_dir_if_exists(&file, &|_| true).is_err());
    }
}
