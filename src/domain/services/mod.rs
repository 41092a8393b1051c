//! Domain Services
//!
//! Pure business logic over the view model. File access, where needed,
//! goes through the `FileSystem` port.

mod change_resolver;
mod code_generator;
mod layout_parser;

pub use change_resolver::ChangeResolver;
pub use code_generator::{HolderGenerator, CLASS_SUFFIX, HOLDR_PACKAGE, SOURCE_EXTENSION};
pub use layout_parser::{LayoutParser, ParseError, ANDROID_NS, APP_NS, DEFAULT_WIDGET_PACKAGE};
