//! Change resolver
//!
//! Decides which layout files a compile run has to parse.
//!
//! A layout declared in several variant directories (`layout/`,
//! `layout-land/`, ...) is merged into one holder, so touching any variant
//! invalidates all of them:
//!
//! 1. changed files inside a variant directory are recompiled and propagated
//! 2. removed files inside a variant directory are only propagated
//! 3. every propagated file pulls in its same-named siblings from the other
//!    variant directories of its resource root
//!
//! Directory access goes through the [`FileSystem`] port, so the algorithm
//! runs unchanged against an in-memory tree.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use crate::domain::ports::{DirEntry, FileSystem};
use crate::domain::value_objects::{is_variant_dir_name, FileSet, LayoutPath};
use crate::error::{HoldrError, HoldrResult};

pub struct ChangeResolver<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
}

impl<'a, FS: FileSystem + ?Sized> ChangeResolver<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self { fs }
    }

    /// Layout files to parse after `changed` and `removed` files
    ///
    /// The result never contains a removed file and never contains a file twice.
    pub fn resolve_files_to_recompile(
        &self,
        changed: &[PathBuf],
        removed: &[PathBuf],
    ) -> HoldrResult<FileSet> {
        let mut recompile = FileSet::new();
        let mut propagate: IndexSet<LayoutPath> = IndexSet::new();

        for file in changed {
            if let Some(layout) = LayoutPath::parse(file) {
                recompile.insert(file.clone());
                propagate.insert(layout);
            }
        }

        for file in removed {
            if let Some(layout) = LayoutPath::parse(file) {
                propagate.insert(layout);
            }
        }

        for layout in &propagate {
            recompile.extend(self.sibling_variants(layout)?);
        }

        for file in removed {
            recompile.remove(file);
        }

        Ok(recompile)
    }

    /// Existing files with the same name in the other variant directories
    pub fn sibling_variants(&self, layout: &LayoutPath) -> HoldrResult<Vec<PathBuf>> {
        let root = layout.listing_root();
        let dirs = self.list(root, &|entry: &DirEntry| {
            entry.is_dir && layout.is_sibling_variant(entry.name())
        })?;

        Ok(dirs
            .iter()
            .map(|dir| layout.in_variant(dir.name()))
            .filter(|sibling| self.fs.is_file(sibling))
            .collect())
    }

    /// Every layout file of every variant directory under `res_dirs`
    ///
    /// Resource roots and variant directories are visited in sorted order;
    /// hidden files are skipped.
    pub fn all_layout_files(&self, res_dirs: &[PathBuf]) -> HoldrResult<FileSet> {
        let mut files = FileSet::new();

        for res_dir in res_dirs {
            let variants = self.list(res_dir, &|entry: &DirEntry| {
                entry.is_dir && is_variant_dir_name(entry.name())
            })?;

            for variant in variants {
                let layouts = self.list(&variant.path, &|entry: &DirEntry| {
                    !entry.is_dir && !entry.name().starts_with('.')
                })?;
                files.extend(layouts.into_iter().map(|entry| entry.path));
            }
        }

        Ok(files)
    }

    fn list(&self, dir: &Path, filter: &dyn Fn(&DirEntry) -> bool) -> HoldrResult<Vec<DirEntry>> {
        self.fs
            .list_dir_if_exists(dir, filter)
            .map_err(|source| HoldrError::DirectoryListing {
                path: dir.to_path_buf(),
                source,
            })
    }
}
