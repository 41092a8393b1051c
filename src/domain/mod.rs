//! Domain Layer
//!
//! The core of Holdr - the view model and the rules that turn layout files
//! into holder sources.
//!
//! ## Structure
//!
//! - `entities/` - View model (View, Layout, Layouts)
//! - `value_objects/` - Immutable value types (LayoutPath, FileSet)
//! - `services/` - Parser, change resolver, code generator
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - file access goes through the `FileSystem` port
//! 2. **Pure Functions** - services are stateless and testable
//! 3. **Ports & Adapters** - infrastructure plugs in behind traits

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
