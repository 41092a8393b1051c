//! Compile Event Port
//!
//! Provides an observable interface for compile runs.
//! Enables console progress, NDJSON event streams, and test assertions.

use std::path::PathBuf;

/// Which entry point started a compile run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileMode {
    Full,
    Incremental,
}

impl CompileMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompileMode::Full => "full",
            CompileMode::Incremental => "incremental",
        }
    }
}

/// Event emitted during a compile run
#[derive(Debug, Clone, PartialEq)]
pub enum CompileEvent {
    /// Candidate layout files have been collected
    Started {
        mode: CompileMode,
        candidate_count: usize,
    },

    /// One layout file was parsed
    FileParsed { path: PathBuf, view_count: usize },

    /// A merged layout has no views, so no holder is generated
    LayoutEmpty { layout: String },

    /// A holder was written
    OutputWritten { layout: String, path: PathBuf },

    /// A holder already had the generated content
    OutputUnchanged { layout: String, path: PathBuf },

    /// An orphaned holder was deleted
    OutputPruned { layout: String, path: PathBuf },

    /// Compile run finished
    Completed {
        written_count: usize,
        unchanged_count: usize,
        empty_count: usize,
        pruned_count: usize,
    },
}

/// Trait for receiving compile events
///
/// Implementations can be:
/// - ConsoleEventSink: progress lines on stderr
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait CompileEventSink: Send + Sync {
    /// Handle a compile event
    fn on_event(&self, event: CompileEvent);

    /// Check if this sink wants per-file events
    ///
    /// Summary-only sinks return false and only see `Started`/`Completed`.
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl CompileEventSink for NoopEventSink {
    fn on_event(&self, _event: CompileEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

/// Test event sink that records all events
#[cfg(test)]
#[derive(Default, Clone)]
pub(crate) struct RecordingEventSink {
    pub(crate) events: std::sync::Arc<std::sync::Mutex<Vec<CompileEvent>>>,
}

#[cfg(test)]
impl RecordingEventSink {
    pub(crate) fn recorded(&self) -> Vec<CompileEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl CompileEventSink for RecordingEventSink {
    fn on_event(&self, event: CompileEvent) {
        self.events.lock().unwrap().push(event);
    }
}
