//! Console Event Sink
//!
//! Human-readable progress lines on stderr.

use std::io::{self, Write};
use std::sync::Mutex;

use is_terminal::IsTerminal;

use crate::config::Verbosity;
use crate::domain::ports::{CompileEvent, CompileEventSink};

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbosity: Verbosity,
    fancy: bool,
}

impl ConsoleEventSink {
    /// Sink writing to stderr; glyphs only when stderr is a terminal
    pub fn stderr(verbosity: Verbosity) -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stderr())),
            verbosity,
            fancy: io::stderr().is_terminal(),
        }
    }

    /// Plain-text sink over any writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbosity: Verbosity) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbosity,
            fancy: false,
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
        }
    }

    fn mark(&self, fancy: &'static str, plain: &'static str) -> &'static str {
        if self.fancy {
            fancy
        } else {
            plain
        }
    }

    fn format(&self, event: &CompileEvent) -> (Verbosity, String) {
        match event {
            CompileEvent::Started {
                mode,
                candidate_count,
            } => (
                Verbosity::Normal,
                format!(
                    "holdr: {} compile, {} layout files",
                    mode.as_str(),
                    candidate_count
                ),
            ),
            CompileEvent::FileParsed { path, view_count } => (
                Verbosity::Verbose,
                format!("  parsed {} ({} views)", path.display(), view_count),
            ),
            CompileEvent::LayoutEmpty { layout } => (
                Verbosity::Verbose,
                format!("  skipped {}: no views", layout),
            ),
            CompileEvent::OutputWritten { path, .. } => (
                Verbosity::Normal,
                format!("  {} {}", self.mark("✓", "wrote"), path.display()),
            ),
            CompileEvent::OutputUnchanged { path, .. } => (
                Verbosity::Verbose,
                format!("  {} {}", self.mark("·", "unchanged"), path.display()),
            ),
            CompileEvent::OutputPruned { path, .. } => (
                Verbosity::Normal,
                format!("  {} {}", self.mark("✗", "pruned"), path.display()),
            ),
            CompileEvent::Completed {
                written_count,
                unchanged_count,
                empty_count,
                pruned_count,
            } => (
                Verbosity::Normal,
                format!(
                    "holdr: {} written, {} unchanged, {} empty, {} pruned",
                    written_count, unchanged_count, empty_count, pruned_count
                ),
            ),
        }
    }
}

impl CompileEventSink for ConsoleEventSink {
    fn on_event(&self, event: CompileEvent) {
        let (level, text) = self.format(&event);
        if self.verbosity >= level {
            self.line(text);
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }
}
