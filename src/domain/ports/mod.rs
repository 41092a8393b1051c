//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod compile_events;
pub mod file_system;

pub use compile_events::{CompileEvent, CompileEventSink, CompileMode, NoopEventSink};
pub use file_system::{DirEntry, FileSystem, FsError, FsResult};
