//! holdr - typed view holders from Android layout files
//!
//! holdr reads layout XML, collects every element that carries an id, merges
//! same-named layouts across `layout*` variant directories and generates one
//! Java holder class per logical layout with a typed field for every view.
//!
//! The crate is layered:
//! - `domain` - entities, value objects, ports and the parse/resolve/generate services
//! - `application` - compile and watch use cases
//! - `infrastructure` - local and in-memory file systems, event sinks
//! - `config` - layered TOML configuration

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{CompileOptions, CompileResult, HoldrCompiler};
pub use config::{Config, Verbosity};
pub use domain::entities::{Layout, Layouts, View};
pub use domain::services::{ChangeResolver, HolderGenerator, LayoutParser};
pub use error::{HoldrError, HoldrResult};
