//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `HoldrCompiler` - Full and incremental compiles (resolve, parse, merge, generate, write)
//! - `WatchUseCase` - File watching with incremental recompilation

pub mod compile;
pub mod watch;

pub use compile::{CompileOptions, CompileResult, HoldrCompiler};
pub use watch::{WatchEvent, WatchOptions, WatchUseCase, WatcherState, DEBOUNCE_MS};
