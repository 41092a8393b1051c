//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod file_set;
mod layout_path;

pub use file_set::FileSet;
pub use layout_path::{is_variant_dir_name, layout_name_of, LayoutPath, VARIANT_DIR_PREFIX};
