//! Layout Path Value Object
//!
//! A layout file seen through the resource directory convention:
//!
//! ```text
//! res/                 <- resource root
//!   layout/            <- variant directory
//!     main.xml         <- layout file, logical name "main"
//!   layout-land/
//!     main.xml         <- same logical layout, another variant
//! ```

use std::path::{Path, PathBuf};

/// Every variant directory name starts with this prefix
pub const VARIANT_DIR_PREFIX: &str = "layout";

/// Does a directory with this name hold layout variants?
pub fn is_variant_dir_name(name: &str) -> bool {
    name.starts_with(VARIANT_DIR_PREFIX)
}

/// Logical layout name of a file: its name without the last extension
pub fn layout_name_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// A file that lives directly inside a variant directory
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayoutPath {
    file: PathBuf,
    file_name: String,
    variant: String,
    res_root: PathBuf,
}

impl LayoutPath {
    /// Interpret `file` as a layout file
    ///
    /// Returns `None` when the file's parent is not a variant directory.
    pub fn parse(file: &Path) -> Option<Self> {
        let file_name = file.file_name()?.to_str()?.to_string();
        let variant_dir = file.parent()?;
        let variant = variant_dir.file_name()?.to_str()?.to_string();
        if !is_variant_dir_name(&variant) {
            return None;
        }
        let res_root = variant_dir.parent().unwrap_or(Path::new("")).to_path_buf();

        Some(Self {
            file: file.to_path_buf(),
            file_name,
            variant,
            res_root,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Name of the variant directory, e.g. `layout-land`
    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub fn res_root(&self) -> &Path {
        &self.res_root
    }

    /// Directory to list when looking for sibling variants
    ///
    /// A bare relative path like `layout/main.xml` has an empty root, which
    /// means the current directory.
    pub fn listing_root(&self) -> &Path {
        if self.res_root.as_os_str().is_empty() {
            Path::new(".")
        } else {
            &self.res_root
        }
    }

    pub fn layout_name(&self) -> String {
        layout_name_of(&self.file)
    }

    /// Is `dir_name` another variant directory of the same resource root?
    pub fn is_sibling_variant(&self, dir_name: &str) -> bool {
        is_variant_dir_name(dir_name) && dir_name != self.variant
    }

    /// Path the same layout would have in the variant directory `dir_name`
    pub fn in_variant(&self, dir_name: &str) -> PathBuf {
        self.res_root.join(dir_name).join(&self.file_name)
    }
}
