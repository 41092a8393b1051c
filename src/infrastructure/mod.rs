//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `events/` - Compile event sinks (Console, JSON)

pub mod events;
pub mod fs;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::{LocalFs, MemoryFs};
