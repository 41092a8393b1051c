//! Watch Use Case
//!
//! Continuous recompilation while layouts are edited:
//! - File system monitoring (via `notify` crate)
//! - Debouncing (100ms)
//! - Classification of touched layout files into changed and removed
//! - Incremental compilation of the affected layouts
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(compiler, WatchOptions::new(res_dirs));
//! use_case.start(running, |event| { ... });
//! ```

mod event;
mod use_case;


pub use event::{
    classify_changes, is_layout_candidate, WatchEvent, WatchOptions, WatcherState, DEBOUNCE_MS,
};
pub use use_case::WatchUseCase;
