//! JSON Event Sink
//!
//! Outputs compile events as NDJSON for CI/automation consumption.

use crate::domain::ports::{CompileEvent, CompileEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON form of an event, one object per line
pub fn event_to_json(event: &CompileEvent) -> serde_json::Value {
    match event {
        CompileEvent::Started {
            mode,
            candidate_count,
        } => serde_json::json!({
            "event": "start",
            "command": "compile",
            "mode": mode.as_str(),
            "candidate_count": candidate_count,
        }),

        CompileEvent::FileParsed { path, view_count } => serde_json::json!({
            "event": "parsed",
            "command": "compile",
            "path": path.display().to_string(),
            "view_count": view_count,
        }),

        CompileEvent::LayoutEmpty { layout } => serde_json::json!({
            "event": "layout_empty",
            "command": "compile",
            "layout": layout,
        }),

        CompileEvent::OutputWritten { layout, path } => serde_json::json!({
            "event": "item_written",
            "command": "compile",
            "layout": layout,
            "path": path.display().to_string(),
        }),

        CompileEvent::OutputUnchanged { layout, path } => serde_json::json!({
            "event": "item_unchanged",
            "command": "compile",
            "layout": layout,
            "path": path.display().to_string(),
        }),

        CompileEvent::OutputPruned { layout, path } => serde_json::json!({
            "event": "item_pruned",
            "command": "compile",
            "layout": layout,
            "path": path.display().to_string(),
        }),

        CompileEvent::Completed {
            written_count,
            unchanged_count,
            empty_count,
            pruned_count,
        } => serde_json::json!({
            "event": "complete",
            "command": "compile",
            "written": written_count,
            "unchanged": unchanged_count,
            "empty": empty_count,
            "pruned": pruned_count,
        }),
    }
}

impl CompileEventSink for JsonEventSink {
    fn on_event(&self, event: CompileEvent) {
        self.write_event(event_to_json(&event));
    }
}
